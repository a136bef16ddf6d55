//! Inventory placement engine.
//!
//! - `kind` / `addressing`: fixed topology of each inventory kind and the
//!   adjacency used by two-slot items
//! - `placement`: decides whether an item fits at a slot, and how
//! - `occupancy`: pure snapshot-in / snapshot-out place, remove and repair
//! - `gating`: which item groups each destination accepts
//!
//! Every mutation returns a new [`Inventory`]; nothing is changed in place.

pub mod addressing;
mod bank;
pub mod gating;
pub mod kind;
pub mod occupancy;
pub mod placement;
mod slot;
mod snapshot;

pub use addressing::{horizontal_neighbor, secondary_slot, vertical_neighbor};
pub use gating::DestinationKind;
pub use kind::{InventoryKind, BODY_SLOT_KEYS, GRIT_SLOT_KEYS, PACK_COLUMNS, PACK_ROWS};
pub use occupancy::{place, reconcile_orphans, remove, Removal};
pub use placement::{resolve_drop, resolve_placement, Placement};
pub use slot::{Slot, SlotContent, SlotRecord};
pub use snapshot::Inventory;
