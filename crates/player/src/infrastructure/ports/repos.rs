//! Sheet store ports.

use async_trait::async_trait;
use mrsheet_domain::{CharacterRecord, Inventory, InventoryKind, InventoryOwner};

use super::error::RepoError;

/// Per-inventory access to the character sheet.
///
/// Body and pack inventories are addressed by owner; the bank and grit tray
/// are shared and have their own accessors. A commit replaces the stored
/// snapshot wholesale.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SheetStorePort: Send + Sync {
    /// Body or pack of `owner`. Fails for shared kinds and unknown hirelings.
    async fn get_inventory(
        &self,
        owner: InventoryOwner,
        kind: InventoryKind,
    ) -> Result<Inventory, RepoError>;

    async fn commit_inventory(
        &self,
        owner: InventoryOwner,
        kind: InventoryKind,
        snapshot: Inventory,
    ) -> Result<(), RepoError>;

    async fn get_bank(&self) -> Result<Inventory, RepoError>;

    async fn commit_bank(&self, bank: Inventory) -> Result<(), RepoError>;

    async fn get_grit(&self) -> Result<Inventory, RepoError>;

    async fn commit_grit(&self, grit: Inventory) -> Result<(), RepoError>;
}

/// Whole-record access, for share links and persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn load_character(&self) -> Result<CharacterRecord, RepoError>;

    async fn replace_character(&self, record: CharacterRecord) -> Result<(), RepoError>;
}
