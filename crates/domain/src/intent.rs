//! Intents - decoded "move this item there" requests
//!
//! The gesture layer turns a drag-and-drop into an [`Intent`]; the router in
//! the player crate applies it. Nothing here knows about pointer events.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::entities::ItemDescriptor;
use crate::inventory::{DestinationKind, InventoryKind};
use crate::value_objects::SlotKey;

/// Whose body and pack an inventory belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type", content = "index")]
pub enum InventoryOwner {
    Player,
    /// Hireling by position in the character's hireling list
    Hireling(usize),
    Warband,
}

impl fmt::Display for InventoryOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => f.write_str("player"),
            Self::Hireling(index) => write!(f, "hireling {index}"),
            Self::Warband => f.write_str("warband"),
        }
    }
}

/// One concrete inventory instance on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryRef {
    Body(InventoryOwner),
    Pack(InventoryOwner),
    /// Shared bank
    Bank,
    /// Shared grit tray
    Grit,
}

impl InventoryRef {
    /// Body or pack of `owner`; `None` for the shared kinds.
    pub fn owned(owner: InventoryOwner, kind: InventoryKind) -> Option<Self> {
        match kind {
            InventoryKind::Body => Some(Self::Body(owner)),
            InventoryKind::Pack => Some(Self::Pack(owner)),
            InventoryKind::Bank | InventoryKind::Grit => None,
        }
    }

    pub fn kind(self) -> InventoryKind {
        match self {
            Self::Body(_) => InventoryKind::Body,
            Self::Pack(_) => InventoryKind::Pack,
            Self::Bank => InventoryKind::Bank,
            Self::Grit => InventoryKind::Grit,
        }
    }

    pub fn owner(self) -> Option<InventoryOwner> {
        match self {
            Self::Body(owner) | Self::Pack(owner) => Some(owner),
            Self::Bank | Self::Grit => None,
        }
    }
}

impl fmt::Display for InventoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.owner() {
            Some(owner) => write!(f, "{owner} {}", self.kind()),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// A slot within a specific inventory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotRef {
    pub inventory: InventoryRef,
    pub key: SlotKey,
}

impl SlotRef {
    pub fn new(inventory: InventoryRef, key: impl Into<SlotKey>) -> Self {
        Self {
            inventory,
            key: key.into(),
        }
    }
}

impl fmt::Display for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.inventory, self.key)
    }
}

/// Where the dragged item is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Slot(SlotRef),
    /// Remove the item from the sheet
    Discard,
}

impl Destination {
    pub fn kind(&self) -> DestinationKind {
        match self {
            Self::Slot(slot) => slot.inventory.kind().into(),
            Self::Discard => DestinationKind::Discard,
        }
    }
}

/// A single placement request.
///
/// `origin` is `None` when the item comes from a source list (a new item)
/// rather than from another slot on the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub origin: Option<SlotRef>,
    pub destination: Destination,
    pub item: ItemDescriptor,
}

impl Intent {
    /// A new item dragged in from a source list.
    pub fn add(destination: SlotRef, item: ItemDescriptor) -> Self {
        Self {
            origin: None,
            destination: Destination::Slot(destination),
            item,
        }
    }

    /// An item dragged from one slot to another.
    pub fn relocate(origin: SlotRef, destination: SlotRef, item: ItemDescriptor) -> Self {
        Self {
            origin: Some(origin),
            destination: Destination::Slot(destination),
            item,
        }
    }

    /// An item dragged onto the discard zone.
    pub fn discard(origin: SlotRef, item: ItemDescriptor) -> Self {
        Self {
            origin: Some(origin),
            destination: Destination::Discard,
            item,
        }
    }
}
