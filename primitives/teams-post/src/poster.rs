//! The channel poster: resolves a channel, authenticates and posts.

use std::fmt;

use tracing::{debug, info};

use crate::channel::ChannelDirectory;
use crate::config::{Config, HttpSettings};
use crate::error::Result;
use crate::graph::{ChatMessage, ClientSecretCredential, GraphClient};
use crate::message::Message;

/// Outcome of a successful post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostResult {
    /// Web URL of the created message.
    Url(String),
    /// The provider accepted the message but returned no URL.
    Posted,
}

impl fmt::Display for PostResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Posted => f.write_str("Posted successfully"),
        }
    }
}

pub struct ChannelPoster {
    credential: ClientSecretCredential,
    team_id: String,
    channels: ChannelDirectory,
    http: HttpSettings,
}

impl ChannelPoster {
    pub fn new(config: Config, channels: ChannelDirectory) -> Self {
        Self {
            credential: config.credential,
            team_id: config.team_id,
            channels,
            http: config.http,
        }
    }

    /// Posts `message` to the channel behind `channel_name`.
    ///
    /// The alias is resolved before any request is made.
    pub async fn post(&self, channel_name: &str, message: &Message) -> Result<PostResult> {
        let channel_id = self.channels.resolve(channel_name)?;
        debug!(channel = channel_name, %channel_id, "resolved channel");

        let client = GraphClient::connect(&self.credential, &self.http).await?;
        debug!("authenticated");

        let created = client
            .post_channel_message(&self.team_id, channel_id, &ChatMessage::html(message.to_html()))
            .await?;
        info!(channel = channel_name, id = ?created.id, "message posted");

        Ok(match created.web_url {
            Some(url) if !url.is_empty() => PostResult::Url(url),
            _ => PostResult::Posted,
        })
    }
}
