// GitHub API module.
// Provides clients, authorization middleware, and types for the GitHub REST API.

pub mod auth;
pub mod client;
pub mod endpoints;
pub mod interceptor;
pub mod types;

pub use auth::AuthClient;
pub use client::GitHubClient;
pub use interceptor::AuthInterceptor;
pub use types::*;
