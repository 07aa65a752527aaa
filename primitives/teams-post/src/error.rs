//! Error types for configuration and posting failures.

use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

/// Problems with the values the poster was started with.
///
/// These are always detected before any network traffic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required values were absent or blank.
    #[error("missing required configuration: {}", .0.join(", "))]
    MissingVars(Vec<&'static str>),

    /// The requested channel alias is not in the alias table.
    #[error("unknown channel: {name}. Available: {}", .available.join(", "))]
    UnknownChannel {
        name: String,
        available: Vec<&'static str>,
    },

    /// An endpoint override is not an absolute, hierarchical URL.
    #[error("invalid URL for {name}: {value}")]
    InvalidUrl { name: &'static str, value: String },
}

/// Failures while authenticating or creating the message.
#[derive(Debug, Error)]
pub enum PostError {
    #[error("HTTP request failed: {}", error_chain(.0))]
    Http(#[from] reqwest::Error),

    #[error("authentication failed with status {status}: {body}")]
    Auth { status: StatusCode, body: String },

    #[error("message post failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("cannot append a path to {0}")]
    InvalidEndpoint(reqwest::Url),
}

/// Renders an error followed by each distinct cause in its source chain.
///
/// reqwest's top-level message names only the URL, not the cause.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !rendered.contains(&text) {
            rendered.push_str(": ");
            rendered.push_str(&text);
        }
        source = cause.source();
    }
    rendered
}

/// Top level error returned by [`crate::ChannelPoster::post`] and [`crate::run`].
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Post(#[from] PostError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_vars_lists_every_name() {
        let err = ConfigError::MissingVars(vec!["M365_TENANT_ID", "M365_TEAM_ID"]);
        assert_eq!(
            err.to_string(),
            "missing required configuration: M365_TENANT_ID, M365_TEAM_ID"
        );
    }

    #[test]
    fn unknown_channel_lists_aliases() {
        let err = ConfigError::UnknownChannel {
            name: "random".to_string(),
            available: vec!["general", "alerts"],
        };
        assert_eq!(
            err.to_string(),
            "unknown channel: random. Available: general, alerts"
        );
    }

    #[derive(Debug, Error)]
    #[error("{0}")]
    struct Layer(&'static str, #[source] Option<Box<Layer>>);

    #[test]
    fn error_chain_appends_distinct_causes() {
        let err = Layer(
            "error sending request",
            Some(Box::new(Layer(
                "client error (Connect)",
                Some(Box::new(Layer("Connection refused", None))),
            ))),
        );
        assert_eq!(
            error_chain(&err),
            "error sending request: client error (Connect): Connection refused"
        );
    }

    #[test]
    fn error_chain_skips_repeated_text() {
        let err = Layer(
            "operation timed out",
            Some(Box::new(Layer("timed out", None))),
        );
        assert_eq!(error_chain(&err), "operation timed out");
    }

    #[test]
    fn top_level_error_is_transparent() {
        let err: Error = PostError::MalformedResponse("no body".to_string()).into();
        assert_eq!(err.to_string(), "malformed response: no body");
    }
}
