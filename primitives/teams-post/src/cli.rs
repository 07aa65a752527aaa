use clap::Parser;

pub const DEFAULT_GRAPH_URL: &str = "https://graph.microsoft.com/v1.0";
pub const DEFAULT_AUTHORITY_URL: &str = "https://login.microsoftonline.com";

/// Posts a message to a Microsoft Teams channel.
///
/// Credential and channel values are optional at this layer so that
/// [`crate::Config::from_args`] can report every missing one at once.
#[derive(Parser, Debug, Clone)]
#[command(name = "teams-post", version)]
#[command(about = "Post to a Teams channel via Microsoft Graph")]
pub struct Args {
    /// Channel name (general, alerts, handoffs).
    #[arg(short, long)]
    pub channel: String,

    /// Message content.
    #[arg(short, long)]
    pub message: String,

    /// Optional title/header.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory (tenant) ID of the app registration.
    #[arg(long, env = "M365_TENANT_ID")]
    pub tenant_id: Option<String>,

    /// Application (client) ID of the app registration.
    #[arg(long, env = "M365_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Client secret of the app registration.
    #[arg(long, env = "M365_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Team that owns the channels.
    #[arg(long, env = "M365_TEAM_ID")]
    pub team_id: Option<String>,

    /// Channel ID behind the `general` aliases.
    #[arg(long, env = "M365_CHANNEL_GENERAL")]
    pub channel_general: Option<String>,

    /// Channel ID behind the `alerts` aliases.
    #[arg(long, env = "M365_CHANNEL_ALERTS")]
    pub channel_alerts: Option<String>,

    /// Channel ID behind the `handoffs` aliases.
    #[arg(long, env = "M365_CHANNEL_HANDOFFS")]
    pub channel_handoffs: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, env = "M365_TIMEOUT", default_value = "30")]
    pub timeout: u64,

    /// Microsoft Graph base URL.
    #[arg(long, env = "M365_GRAPH_URL", default_value = DEFAULT_GRAPH_URL)]
    pub graph_url: String,

    /// Token authority base URL.
    #[arg(long, env = "M365_AUTHORITY_URL", default_value = DEFAULT_AUTHORITY_URL)]
    pub authority_url: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}
