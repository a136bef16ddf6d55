//! Share link errors.

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum ShareLinkError {
    #[error("Failed to serialize character: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid share base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
