//! Slot addressing - adjacency over the pack grid numbering.
//!
//! Pack slots are numbered row-major:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! ```
//!
//! Horizontal neighbours stay within a row (3 and 4 are not neighbours) and
//! vertical neighbours are one row down. There is no wraparound. Body, bank
//! and grit inventories have no adjacency at all.

use super::kind::{InventoryKind, PACK_COLUMNS, PACK_ROWS};
use crate::value_objects::{Orientation, SlotKey};

fn pack_position(key: &SlotKey) -> Option<u8> {
    key.number()
        .filter(|n| (1..=PACK_COLUMNS * PACK_ROWS).contains(n))
}

/// The slot to the right of `key`, if any.
pub fn horizontal_neighbor(kind: InventoryKind, key: &SlotKey) -> Option<SlotKey> {
    if kind != InventoryKind::Pack {
        return None;
    }
    let n = pack_position(key)?;
    if n % PACK_COLUMNS == 0 {
        return None;
    }
    Some(SlotKey::from(n + 1))
}

/// The slot below `key`, if any.
pub fn vertical_neighbor(kind: InventoryKind, key: &SlotKey) -> Option<SlotKey> {
    if kind != InventoryKind::Pack {
        return None;
    }
    let n = pack_position(key)?;
    if n > PACK_COLUMNS * (PACK_ROWS - 1) {
        return None;
    }
    Some(SlotKey::from(n + PACK_COLUMNS))
}

/// The secondary slot a two-slot item at `primary` covers in `orientation`.
pub fn secondary_slot(
    kind: InventoryKind,
    primary: &SlotKey,
    orientation: Orientation,
) -> Option<SlotKey> {
    match orientation {
        Orientation::Horizontal => horizontal_neighbor(kind, primary),
        Orientation::Vertical => vertical_neighbor(kind, primary),
    }
}
