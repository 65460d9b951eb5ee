// Error types for the hubauth client.
// Covers transport failures, response decoding, API status errors, and token storage.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubauthError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("authentication failed: invalid or expired token")]
    Unauthorized,

    #[error("GitHub API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("token store error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, HubauthError>;
