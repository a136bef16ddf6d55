//! Character record - the sheet that owns every inventory
//!
//! Only the inventory fields are typed. Everything else on the sheet (name,
//! stats, background, ...) passes through untouched in `extra`, so a record
//! read from storage or a share link serializes back with all its fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DomainError;
use crate::intent::{InventoryOwner, InventoryRef};
use crate::inventory::{reconcile_orphans, Inventory, InventoryKind};

/// Body and pack of a hireling or the warband.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedInventories {
    #[serde(with = "body_slots", default = "Inventory::body")]
    pub body_back: Inventory,
    #[serde(with = "pack_slots", default = "Inventory::pack")]
    pub pack_back: Inventory,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for OwnedInventories {
    fn default() -> Self {
        Self {
            body_back: Inventory::body(),
            pack_back: Inventory::pack(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    #[serde(with = "body_slots", default = "Inventory::body")]
    pub body_back: Inventory,
    #[serde(with = "pack_slots", default = "Inventory::pack")]
    pub pack_back: Inventory,
    #[serde(default)]
    pub hirelings: Vec<OwnedInventories>,
    #[serde(default)]
    pub warband: OwnedInventories,
    #[serde(with = "bank_slots", default = "Inventory::bank")]
    pub bank: Inventory,
    #[serde(with = "grit_slots", default = "Inventory::grit")]
    pub grit: Inventory,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for CharacterRecord {
    fn default() -> Self {
        Self {
            body_back: Inventory::body(),
            pack_back: Inventory::pack(),
            hirelings: Vec::new(),
            warband: OwnedInventories::default(),
            bank: Inventory::bank(),
            grit: Inventory::grit(),
            extra: Map::new(),
        }
    }
}

impl CharacterRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inventory(&self, at: InventoryRef) -> Result<&Inventory, DomainError> {
        use InventoryOwner::*;
        Ok(match at {
            InventoryRef::Body(Player) => &self.body_back,
            InventoryRef::Pack(Player) => &self.pack_back,
            InventoryRef::Body(Warband) => &self.warband.body_back,
            InventoryRef::Pack(Warband) => &self.warband.pack_back,
            InventoryRef::Body(Hireling(index)) => &self.hireling(index)?.body_back,
            InventoryRef::Pack(Hireling(index)) => &self.hireling(index)?.pack_back,
            InventoryRef::Bank => &self.bank,
            InventoryRef::Grit => &self.grit,
        })
    }

    /// Swaps in a new snapshot for `at`. The snapshot's kind must match.
    pub fn replace_inventory(
        &mut self,
        at: InventoryRef,
        inventory: Inventory,
    ) -> Result<(), DomainError> {
        if inventory.kind() != at.kind() {
            return Err(DomainError::validation(format!(
                "cannot store a {} inventory as the {at}",
                inventory.kind()
            )));
        }
        *self.inventory_mut(at)? = inventory;
        Ok(())
    }

    /// Appends a hireling with empty inventories and returns its index.
    pub fn add_hireling(&mut self) -> usize {
        self.hirelings.push(OwnedInventories::default());
        self.hirelings.len() - 1
    }

    /// Repairs data from outside the app: every inventory gets its orphaned
    /// markers cleared and the bank is compacted. Topology is already
    /// normalized by deserialization.
    pub fn restored(mut self) -> Self {
        for inventory in [
            &mut self.body_back,
            &mut self.pack_back,
            &mut self.bank,
            &mut self.grit,
        ] {
            *inventory = reconcile_orphans(inventory);
        }
        for owner in std::iter::once(&mut self.warband).chain(self.hirelings.iter_mut()) {
            owner.body_back = reconcile_orphans(&owner.body_back);
            owner.pack_back = reconcile_orphans(&owner.pack_back);
        }
        self
    }

    fn hireling(&self, index: usize) -> Result<&OwnedInventories, DomainError> {
        self.hirelings
            .get(index)
            .ok_or_else(|| DomainError::not_found("Hireling", index.to_string()))
    }

    fn hireling_mut(&mut self, index: usize) -> Result<&mut OwnedInventories, DomainError> {
        self.hirelings
            .get_mut(index)
            .ok_or_else(|| DomainError::not_found("Hireling", index.to_string()))
    }

    fn inventory_mut(&mut self, at: InventoryRef) -> Result<&mut Inventory, DomainError> {
        use InventoryOwner::*;
        Ok(match at {
            InventoryRef::Body(Player) => &mut self.body_back,
            InventoryRef::Pack(Player) => &mut self.pack_back,
            InventoryRef::Body(Warband) => &mut self.warband.body_back,
            InventoryRef::Pack(Warband) => &mut self.warband.pack_back,
            InventoryRef::Body(Hireling(index)) => &mut self.hireling_mut(index)?.body_back,
            InventoryRef::Pack(Hireling(index)) => &mut self.hireling_mut(index)?.pack_back,
            InventoryRef::Bank => &mut self.bank,
            InventoryRef::Grit => &mut self.grit,
        })
    }
}

mod body_slots {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(inventory: &Inventory, s: S) -> Result<S::Ok, S::Error> {
        inventory.serialize_keyed(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Inventory, D::Error> {
        Inventory::deserialize_keyed(InventoryKind::Body, d)
    }
}

mod pack_slots {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(inventory: &Inventory, s: S) -> Result<S::Ok, S::Error> {
        inventory.serialize_keyed(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Inventory, D::Error> {
        Inventory::deserialize_keyed(InventoryKind::Pack, d)
    }
}

mod grit_slots {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(inventory: &Inventory, s: S) -> Result<S::Ok, S::Error> {
        inventory.serialize_keyed(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Inventory, D::Error> {
        Inventory::deserialize_keyed(InventoryKind::Grit, d)
    }
}

mod bank_slots {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(inventory: &Inventory, s: S) -> Result<S::Ok, S::Error> {
        inventory.serialize_listed(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Inventory, D::Error> {
        Inventory::deserialize_listed(InventoryKind::Bank, d)
    }
}
