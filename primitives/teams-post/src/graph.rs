//! Microsoft Graph client.
//!
//! Obtains an app-only access token with the OAuth2 client-credentials grant
//! and creates channel messages with it.
//!
//! # Endpoints
//!
//! - `POST {authority}/{tenant}/oauth2/v2.0/token`
//! - `POST {graph}/teams/{team}/channels/{channel}/messages`

use std::fmt;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::HttpSettings;
use crate::error::PostError;

const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
const HTML_CONTENT_TYPE: &str = "html";

/// Appends `segments` to `base`, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, PostError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| PostError::InvalidEndpoint(base.clone()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Tenant, client ID and secret of an app registration.
#[derive(Clone)]
pub struct ClientSecretCredential {
    tenant_id: String,
    client_id: String,
    client_secret: String,
}

impl fmt::Debug for ClientSecretCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSecretCredential")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl ClientSecretCredential {
    pub fn new(tenant_id: String, client_id: String, client_secret: String) -> Self {
        Self {
            tenant_id,
            client_id,
            client_secret,
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Exchanges the credential for an access token.
    async fn request_token(&self, http: &Client, authority_url: &Url) -> Result<String, PostError> {
        let url = endpoint(authority_url, &[self.tenant_id.as_str(), "oauth2", "v2.0", "token"])?;
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret()),
            ("scope", GRAPH_SCOPE),
        ];

        let response = http.post(url).form(&form).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PostError::Auth { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| PostError::MalformedResponse(format!("token response: {e}")))?;

        match token.access_token {
            Some(t) if !t.is_empty() => Ok(t),
            _ => Err(PostError::MalformedResponse(
                "token response missing access_token".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Request body for creating a `chatMessage`.
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub body: ItemBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    pub content_type: &'static str,
    pub content: String,
}

impl ChatMessage {
    pub fn html(content: String) -> Self {
        Self {
            body: ItemBody {
                content_type: HTML_CONTENT_TYPE,
                content,
            },
        }
    }
}

/// The fields of a created `chatMessage` this tool cares about.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedMessage {
    pub id: Option<String>,
    pub web_url: Option<String>,
}

/// A Graph client holding a bearer token.
pub struct GraphClient {
    http: Client,
    graph_url: Url,
    token: String,
}

impl GraphClient {
    /// Builds the HTTP client and authenticates with `credential`.
    pub async fn connect(
        credential: &ClientSecretCredential,
        settings: &HttpSettings,
    ) -> Result<Self, PostError> {
        let http = Client::builder().timeout(settings.timeout).build()?;

        debug!(tenant = %credential.tenant_id, "requesting access token");
        let token = credential
            .request_token(&http, &settings.authority_url)
            .await?;

        Ok(Self {
            http,
            graph_url: settings.graph_url.clone(),
            token,
        })
    }

    /// Creates a message in a channel.
    pub async fn post_channel_message(
        &self,
        team_id: &str,
        channel_id: &str,
        message: &ChatMessage,
    ) -> Result<CreatedMessage, PostError> {
        let url = endpoint(
            &self.graph_url,
            &["teams", team_id, "channels", channel_id, "messages"],
        )?;

        debug!(%url, "creating channel message");
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PostError::Status { status, body });
        }

        response
            .json::<CreatedMessage>()
            .await
            .map_err(|e| PostError::MalformedResponse(format!("chat message: {e}")))
    }
}
