// GitHub REST API client library.
// OAuth code exchange, persisted token storage, and typed resource endpoints.

pub mod error;
pub mod github;
pub mod token;

pub use error::{HubauthError, Result};
pub use github::{AuthClient, AuthInterceptor, GitHubClient};
pub use token::TokenStore;
