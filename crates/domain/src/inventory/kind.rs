//! Inventory kinds and their fixed slot layouts

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::SlotKey;

/// Body slots: the two paws and two body cells. No adjacency between them.
pub const BODY_SLOT_KEYS: [&str; 4] = ["mainPaw", "offPaw", "body1", "body2"];

/// Pack grid width. Slots are numbered row-major starting at 1.
pub const PACK_COLUMNS: u8 = 3;

/// Pack grid height.
pub const PACK_ROWS: u8 = 2;

/// Grit tray slots.
pub const GRIT_SLOT_KEYS: [&str; 3] = ["grit__1", "grit__2", "grit__3"];

/// Topology of an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InventoryKind {
    /// Independent single cells
    Body,
    /// Numbered grid with horizontal and vertical adjacency
    Pack,
    /// Ordered, auto-growing list with one trailing empty slot
    Bank,
    /// Small fixed set of condition slots
    Grit,
}

impl InventoryKind {
    /// Slot keys an empty inventory of this kind starts with.
    ///
    /// The bank starts with its single trailing slot and grows from there.
    pub fn initial_keys(self) -> Vec<SlotKey> {
        match self {
            Self::Body => BODY_SLOT_KEYS.iter().map(|k| SlotKey::new(*k)).collect(),
            Self::Pack => (1..=PACK_COLUMNS * PACK_ROWS).map(SlotKey::from).collect(),
            Self::Bank => vec![SlotKey::bank(0)],
            Self::Grit => GRIT_SLOT_KEYS.iter().map(|k| SlotKey::new(*k)).collect(),
        }
    }

    /// Whether the slot set is fixed (everything but the bank).
    pub fn is_fixed(self) -> bool {
        !matches!(self, Self::Bank)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Pack => "pack",
            Self::Bank => "bank",
            Self::Grit => "grit",
        }
    }
}

impl fmt::Display for InventoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
