// Authorization interceptor.
// Attaches the persisted bearer token to outbound requests.

use std::sync::Arc;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::debug;

use crate::error::{HubauthError, Result};
use crate::token::TokenStore;

/// Injects `Authorization: bearer <token>` into every outbound request.
///
/// The token is re-read from the store on each call, so a freshly saved
/// token takes effect on the next request without rebuilding the client.
/// When no token has been persisted the request is forwarded without an
/// Authorization header.
#[derive(Debug, Clone)]
pub struct AuthInterceptor {
    store: Arc<TokenStore>,
}

impl AuthInterceptor {
    /// Create an interceptor reading from the given token store.
    pub fn new(store: Arc<TokenStore>) -> Self {
        Self { store }
    }

    /// Add the authorization header to a request, leaving the rest untouched.
    pub fn intercept(&self, request: &mut Request) -> Result<()> {
        let Some(token) = self.store.load()? else {
            debug!("no persisted token, forwarding request unauthenticated");
            return Ok(());
        };

        let value = HeaderValue::from_str(&format!("bearer {}", token))
            .map_err(|e| HubauthError::Other(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
        debug!("attached authorization header");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{Client, Method};
    use tempfile::TempDir;

    fn build_request() -> Request {
        Client::new()
            .request(Method::GET, "https://api.github.com/user")
            .header("X-Custom", "kept")
            .build()
            .unwrap()
    }

    #[test]
    fn test_attaches_bearer_token() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(TokenStore::new(temp_dir.path().join("access_token")));
        store.save("XYZ").unwrap();

        let interceptor = AuthInterceptor::new(store);
        let mut request = build_request();
        interceptor.intercept(&mut request).unwrap();

        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "bearer XYZ"
        );
    }

    #[test]
    fn test_leaves_rest_of_request_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(TokenStore::new(temp_dir.path().join("access_token")));
        store.save("XYZ").unwrap();

        let interceptor = AuthInterceptor::new(store);
        let mut request = build_request();
        interceptor.intercept(&mut request).unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://api.github.com/user");
        assert_eq!(request.headers().get("X-Custom").unwrap(), "kept");
    }

    #[test]
    fn test_no_header_when_token_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(TokenStore::new(temp_dir.path().join("access_token")));

        let interceptor = AuthInterceptor::new(store);
        let mut request = build_request();
        interceptor.intercept(&mut request).unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_rereads_token_on_every_call() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(TokenStore::new(temp_dir.path().join("access_token")));
        store.save("first").unwrap();

        let interceptor = AuthInterceptor::new(store.clone());

        let mut request = build_request();
        interceptor.intercept(&mut request).unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "bearer first"
        );

        store.save("second").unwrap();

        let mut request = build_request();
        interceptor.intercept(&mut request).unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "bearer second"
        );
    }
}
