// GitHub API HTTP client.
// Runs every outbound request through the authorization interceptor and
// converts non-success statuses into structured errors.

use std::sync::Arc;

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{HubauthError, Result};
use crate::token::TokenStore;

use super::interceptor::AuthInterceptor;

const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub resource API client with per-request token injection.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    interceptor: AuthInterceptor,
}

impl GitHubClient {
    /// Create a client for api.github.com, reading tokens from the given store.
    pub fn new(store: Arc<TokenStore>) -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE, store)
    }

    /// Create a client against a custom resource API host.
    pub fn with_base_url(base_url: impl Into<String>, store: Arc<TokenStore>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("hubauth"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(HubauthError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            interceptor: AuthInterceptor::new(store),
        })
    }

    /// Make a GET request and decode the JSON response body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let request = self.client.get(self.url(endpoint)).build()?;
        let response = self.execute(request).await?;
        self.decode(response).await
    }

    /// Make a GET request with query parameters and decode the JSON response body.
    pub(crate) async fn get_json_with_params<T, P>(&self, endpoint: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let request = self.client.get(self.url(endpoint)).query(params).build()?;
        let response = self.execute(request).await?;
        self.decode(response).await
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Run the interceptor, send the request, and check the response status.
    async fn execute(&self, mut request: reqwest::Request) -> Result<Response> {
        self.interceptor.intercept(&mut request)?;

        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .client
            .execute(request)
            .await
            .map_err(HubauthError::Transport)?;

        self.check_response(response).await
    }

    /// Read the body as text and decode it, so shape mismatches surface as
    /// a decode error rather than a transport error.
    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let text = response.text().await.map_err(HubauthError::Transport)?;
        let value = serde_json::from_str(&text)?;
        Ok(value)
    }

    /// Check response status and convert errors.
    async fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(HubauthError::Unauthorized),
            status => Err(HubauthError::Api {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            }),
        }
    }
}
