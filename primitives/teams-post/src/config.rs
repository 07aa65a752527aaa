//! Validated runtime configuration.
//!
//! [`Config::from_args`] is the only way to build a [`Config`]; it checks
//! every required value and reports all missing names in one error.

use std::time::Duration;

use reqwest::Url;

use crate::cli::Args;
use crate::error::ConfigError;
use crate::graph::ClientSecretCredential;

pub const TENANT_ID_VAR: &str = "M365_TENANT_ID";
pub const CLIENT_ID_VAR: &str = "M365_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "M365_CLIENT_SECRET";
pub const TEAM_ID_VAR: &str = "M365_TEAM_ID";
pub const CHANNEL_GENERAL_VAR: &str = "M365_CHANNEL_GENERAL";
pub const CHANNEL_ALERTS_VAR: &str = "M365_CHANNEL_ALERTS";
pub const CHANNEL_HANDOFFS_VAR: &str = "M365_CHANNEL_HANDOFFS";
pub const GRAPH_URL_VAR: &str = "M365_GRAPH_URL";
pub const AUTHORITY_URL_VAR: &str = "M365_AUTHORITY_URL";

/// Provider channel identifiers, one per alias group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIds {
    pub general: String,
    pub alerts: String,
    pub handoffs: String,
}

/// Endpoint and timeout settings for outbound requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub timeout: Duration,
    pub graph_url: Url,
    pub authority_url: Url,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub credential: ClientSecretCredential,
    pub team_id: String,
    pub channels: ChannelIds,
    pub http: HttpSettings,
}

/// Collects required values, remembering the name of each one that is absent.
#[derive(Default)]
struct Required {
    missing: Vec<&'static str>,
}

impl Required {
    fn take(&mut self, name: &'static str, value: &Option<String>) -> String {
        match value.as_deref() {
            Some(v) if !v.trim().is_empty() => v.to_string(),
            _ => {
                self.missing.push(name);
                String::new()
            }
        }
    }
}

/// Parses an endpoint base URL that path segments can be appended to.
fn base_url(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    match Url::parse(value) {
        Ok(url) if !url.cannot_be_a_base() => Ok(url),
        _ => Err(ConfigError::InvalidUrl {
            name,
            value: value.to_string(),
        }),
    }
}

impl Config {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let mut required = Required::default();

        let tenant_id = required.take(TENANT_ID_VAR, &args.tenant_id);
        let client_id = required.take(CLIENT_ID_VAR, &args.client_id);
        let client_secret = required.take(CLIENT_SECRET_VAR, &args.client_secret);
        let team_id = required.take(TEAM_ID_VAR, &args.team_id);
        let general = required.take(CHANNEL_GENERAL_VAR, &args.channel_general);
        let alerts = required.take(CHANNEL_ALERTS_VAR, &args.channel_alerts);
        let handoffs = required.take(CHANNEL_HANDOFFS_VAR, &args.channel_handoffs);

        if !required.missing.is_empty() {
            return Err(ConfigError::MissingVars(required.missing));
        }

        let graph_url = base_url(GRAPH_URL_VAR, &args.graph_url)?;
        let authority_url = base_url(AUTHORITY_URL_VAR, &args.authority_url)?;

        Ok(Self {
            credential: ClientSecretCredential::new(tenant_id, client_id, client_secret),
            team_id,
            channels: ChannelIds {
                general,
                alerts,
                handoffs,
            },
            http: HttpSettings {
                timeout: Duration::from_secs(args.timeout),
                graph_url,
                authority_url,
            },
        })
    }
}
