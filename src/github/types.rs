// GitHub API request and response types.
// Defines structs for serializing requests to and deserializing responses from
// the GitHub OAuth and REST APIs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body for the OAuth access token exchange.
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenRequest {
    pub client_id: String,
    pub client_secret: String,
    pub code: String,
}

/// Access token returned by the OAuth exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// GitHub user profile from the current-user endpoint.
///
/// Fields the API may return as JSON `null` are options; values are passed
/// through from the remote representation without local validation.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
    pub avatar_url: String,
    #[serde(rename = "type")]
    pub user_type: String,
    pub name: Option<String>,
    pub location: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u64,
    pub followers: u64,
    pub following: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// GitHub repository from search results.
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub owner: RepositoryOwner,
    pub description: Option<String>,
}

/// Repository owner, carried for display only.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryOwner {
    pub login: String,
    pub avatar_url: String,
}

/// Repository search response.
///
/// `items` keeps the ranked order returned by the search API; `total_count`
/// may exceed `items.len()` when results span more pages than were fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositorySearchResult {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<Repository>,
}
