// GitHub API endpoint functions.
// Provides typed methods for fetching data from the GitHub REST API.

use crate::error::Result;

use super::client::GitHubClient;
use super::types::{RepositorySearchResult, User};

impl GitHubClient {
    /// Get the authenticated user.
    ///
    /// Fails with `HubauthError::Unauthorized` when the persisted token is
    /// missing or expired; re-authentication is the caller's responsibility.
    pub async fn get_current_user(&self) -> Result<User> {
        self.get_json("/user").await
    }

    /// Search repositories matching a query.
    ///
    /// The query string is passed through untouched; qualifiers such as
    /// `language:` or `stars:` are interpreted by the search API, not here.
    pub async fn search_repositories(&self, query: &str) -> Result<RepositorySearchResult> {
        self.get_json_with_params("/search/repositories", &[("q", query)])
            .await
    }
}
