//! Mausritter sheet domain: the inventory placement engine.
//!
//! Pure, synchronous and free of I/O. The player crate wires it to storage,
//! the remote content API and the share-link codec.

pub mod character;
pub mod entities;
pub mod error;
pub mod intent;
pub mod inventory;
pub mod value_objects;

pub use character::{CharacterRecord, OwnedInventories};
pub use entities::ItemDescriptor;
pub use error::{DomainError, PlacementRejection};
pub use intent::{Destination, Intent, InventoryOwner, InventoryRef, SlotRef};
pub use inventory::{
    place, reconcile_orphans, remove, resolve_drop, resolve_placement, DestinationKind, Inventory,
    InventoryKind, Placement, Removal, Slot, SlotContent, SlotRecord,
};
pub use value_objects::{ItemGroup, Orientation, SlotCount, SlotKey, BANK_KEY_PREFIX};
