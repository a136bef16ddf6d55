//! Share link use cases.

use std::sync::Arc;

use crate::infrastructure::ports::CharacterRepo;

mod encoding;
mod error;

pub use encoding::{build_share_url, extract_share_character, has_share_param, shareable_state};
pub use error::ShareLinkError;

/// Encodes the stored character into a link and imports characters from links.
pub struct ShareLinks {
    repo: Arc<dyn CharacterRepo>,
    base_url: String,
}

impl ShareLinks {
    pub fn new(repo: Arc<dyn CharacterRepo>, base_url: impl Into<String>) -> Self {
        Self {
            repo,
            base_url: base_url.into(),
        }
    }

    /// Link to the currently stored character.
    pub async fn share_url(&self) -> Result<String, ShareLinkError> {
        let record = self.repo.load_character().await?;
        build_share_url(&record, &self.base_url)
    }

    /// Replaces the stored character with the one carried by `hash`.
    ///
    /// Returns `false`, leaving the store alone, if the fragment carries no
    /// decodable character.
    pub async fn import(&self, hash: &str) -> Result<bool, ShareLinkError> {
        let Some(record) = extract_share_character(hash) else {
            return Ok(false);
        };
        self.repo.replace_character(record).await?;
        tracing::info!("Imported character from share link");
        Ok(true)
    }
}
