//! Teams Post - Microsoft Teams Channel Poster
//!
//! Authenticates with the OAuth2 client-credentials flow and posts an HTML
//! message to a Teams channel through Microsoft Graph.
//!
//! # Usage
//!
//! ```bash
//! export M365_TENANT_ID=... M365_CLIENT_ID=... M365_CLIENT_SECRET=...
//! export M365_TEAM_ID=...
//! export M365_CHANNEL_GENERAL=... M365_CHANNEL_ALERTS=... M365_CHANNEL_HANDOFFS=...
//!
//! # Post a plain message
//! teams-post --channel general --message "Deploy finished"
//!
//! # With a bold title
//! teams-post -c amplifier-handoffs -t "Handoff" -m "Over to you"
//! ```

pub mod channel;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod message;
pub mod poster;

pub use channel::ChannelDirectory;
pub use cli::Args;
pub use config::Config;
pub use error::{ConfigError, Error, PostError, Result};
pub use message::Message;
pub use poster::{ChannelPoster, PostResult};

/// Validates `args`, then posts the message they describe.
pub async fn run(args: &Args) -> Result<PostResult> {
    let config = Config::from_args(args)?;
    let channels = ChannelDirectory::new(&config.channels);
    let poster = ChannelPoster::new(config, channels);

    let mut message = Message::new(args.message.clone());
    if let Some(title) = &args.title {
        message = message.with_title(title.clone());
    }

    poster.post(&args.channel, &message).await
}
