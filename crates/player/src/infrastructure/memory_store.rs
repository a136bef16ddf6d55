//! In-memory sheet store holding one character record.

use async_trait::async_trait;
use std::sync::RwLock;

use mrsheet_domain::{CharacterRecord, Inventory, InventoryKind, InventoryOwner, InventoryRef};

use crate::infrastructure::ports::{CharacterRepo, RepoError, SheetStorePort};

/// The live character sheet.
///
/// Every commit swaps one inventory snapshot inside the record; readers always
/// see either the old or the new snapshot, never a partial one.
#[derive(Debug, Default)]
pub struct InMemorySheetStore {
    record: RwLock<CharacterRecord>,
}

impl InMemorySheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_record(record: CharacterRecord) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    fn read<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce(&CharacterRecord) -> Result<T, RepoError>,
    ) -> Result<T, RepoError> {
        let guard = self
            .record
            .read()
            .map_err(|e| RepoError::storage(operation, e))?;
        f(&guard)
    }

    fn write(
        &self,
        operation: &'static str,
        f: impl FnOnce(&mut CharacterRecord) -> Result<(), RepoError>,
    ) -> Result<(), RepoError> {
        let mut guard = self
            .record
            .write()
            .map_err(|e| RepoError::storage(operation, e))?;
        f(&mut guard)
    }
}

fn owned_ref(owner: InventoryOwner, kind: InventoryKind) -> Result<InventoryRef, RepoError> {
    InventoryRef::owned(owner, kind)
        .ok_or_else(|| RepoError::constraint(format!("the {kind} is shared and has no owner")))
}

#[async_trait]
impl SheetStorePort for InMemorySheetStore {
    async fn get_inventory(
        &self,
        owner: InventoryOwner,
        kind: InventoryKind,
    ) -> Result<Inventory, RepoError> {
        let at = owned_ref(owner, kind)?;
        self.read("get_inventory", |record| Ok(record.inventory(at)?.clone()))
    }

    async fn commit_inventory(
        &self,
        owner: InventoryOwner,
        kind: InventoryKind,
        snapshot: Inventory,
    ) -> Result<(), RepoError> {
        let at = owned_ref(owner, kind)?;
        self.write("commit_inventory", |record| {
            Ok(record.replace_inventory(at, snapshot)?)
        })
    }

    async fn get_bank(&self) -> Result<Inventory, RepoError> {
        self.read("get_bank", |record| Ok(record.bank.clone()))
    }

    async fn commit_bank(&self, bank: Inventory) -> Result<(), RepoError> {
        self.write("commit_bank", |record| {
            Ok(record.replace_inventory(InventoryRef::Bank, bank)?)
        })
    }

    async fn get_grit(&self) -> Result<Inventory, RepoError> {
        self.read("get_grit", |record| Ok(record.grit.clone()))
    }

    async fn commit_grit(&self, grit: Inventory) -> Result<(), RepoError> {
        self.write("commit_grit", |record| {
            Ok(record.replace_inventory(InventoryRef::Grit, grit)?)
        })
    }
}

#[async_trait]
impl CharacterRepo for InMemorySheetStore {
    async fn load_character(&self) -> Result<CharacterRecord, RepoError> {
        self.read("load_character", |record| Ok(record.clone()))
    }

    async fn replace_character(&self, record: CharacterRecord) -> Result<(), RepoError> {
        self.write("replace_character", |current| {
            *current = record;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrsheet_domain::{place, ItemDescriptor, Placement, SlotKey};

    #[tokio::test]
    async fn commit_then_read_back() {
        let store = InMemorySheetStore::new();
        let pack = store
            .get_inventory(InventoryOwner::Player, InventoryKind::Pack)
            .await
            .unwrap();
        let pack = place(&pack, &SlotKey::new("3"), ItemDescriptor::item("Torch"), Placement::Single)
            .unwrap();

        store
            .commit_inventory(InventoryOwner::Player, InventoryKind::Pack, pack.clone())
            .await
            .unwrap();
        let stored = store
            .get_inventory(InventoryOwner::Player, InventoryKind::Pack)
            .await
            .unwrap();
        assert_eq!(stored, pack);
    }

    #[tokio::test]
    async fn shared_kinds_have_their_own_accessors() {
        let store = InMemorySheetStore::new();
        let err = store
            .get_inventory(InventoryOwner::Player, InventoryKind::Bank)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
        assert_eq!(store.get_bank().await.unwrap(), Inventory::bank());
    }

    #[tokio::test]
    async fn unknown_hireling_is_not_found() {
        let store = InMemorySheetStore::new();
        let err = store
            .get_inventory(InventoryOwner::Hireling(1), InventoryKind::Body)
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn wrong_kind_commit_is_refused() {
        let store = InMemorySheetStore::new();
        let err = store.commit_grit(Inventory::bank()).await.unwrap_err();
        assert!(matches!(err, RepoError::ConstraintViolation(_)));
    }
}
