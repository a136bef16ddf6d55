//! Inventory operation errors.

use crate::infrastructure::ports::RepoError;

/// Failures reading or committing inventories.
///
/// A refused placement is not an error; see
/// [`IntentOutcome::Rejected`](super::IntentOutcome::Rejected).
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
