// OAuth code exchange client.
// Trades a short-lived authorization code for a durable access token.

use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{HubauthError, Result};

use super::types::{AccessToken, AccessTokenRequest};

const GITHUB_OAUTH_BASE: &str = "https://github.com";
const ACCESS_TOKEN_PATH: &str = "/login/oauth/access_token";

/// Client for the GitHub authorization server.
pub struct AuthClient {
    client: Client,
    base_url: String,
}

impl AuthClient {
    /// Create a client for the github.com authorization server.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_OAUTH_BASE)
    }

    /// Create a client against a custom authorization server host.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HubauthError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Exchange an OAuth authorization code for an access token.
    ///
    /// Issues a single POST with a JSON body; no retry is performed, the
    /// caller decides whether to retry a failed exchange.
    pub async fn exchange_code(
        &self,
        client_id: &str,
        client_secret: &str,
        code: &str,
    ) -> Result<AccessToken> {
        let url = format!("{}{}", self.base_url, ACCESS_TOKEN_PATH);
        let body = AccessTokenRequest {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            code: code.to_string(),
        };

        debug!(%url, "POST access token exchange");
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(HubauthError::Transport)?;

        let status = response.status();
        let text = response.text().await.map_err(HubauthError::Transport)?;
        if !status.is_success() {
            return Err(HubauthError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let token: AccessToken = serde_json::from_str(&text)?;
        Ok(token)
    }
}
