//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - The character sheet store (in memory today, browser storage in the web client)
//! - The remote content API
//! - Key/value persistence of settings and cached content
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod storage;
mod testing;

pub use error::{ApiError, RepoError};
pub use external::{ApiCredentials, ContentApiPort};
pub use repos::{CharacterRepo, SheetStorePort};
pub use storage::{storage_keys, StoragePort};
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockContentApiPort;
#[cfg(test)]
pub use repos::{MockCharacterRepo, MockSheetStorePort};
#[cfg(test)]
pub use storage::MockStoragePort;
#[cfg(test)]
pub use testing::MockClockPort;
