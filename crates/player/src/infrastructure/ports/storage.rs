//! Key/value persistence port.

use super::error::RepoError;

/// Persistent string storage (a JSON file on desktop, localStorage on web).
#[cfg_attr(test, mockall::automock)]
pub trait StoragePort: Send + Sync {
    fn save(&self, key: &str, value: &str) -> Result<(), RepoError>;

    fn load(&self, key: &str) -> Result<Option<String>, RepoError>;

    fn remove(&self, key: &str) -> Result<(), RepoError>;
}

/// Storage key constants.
///
/// Shared with the web client so both read the same entries.
pub mod storage_keys {
    /// Custom content cache and backend settings
    pub const CUSTOM_DATA: &str = "mr__customData";
    /// The character sheet
    pub const CHARACTER: &str = "mr__character";
}
