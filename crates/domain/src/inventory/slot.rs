//! Slot - one addressable cell of an inventory

use serde::{Deserialize, Serialize};

use crate::entities::ItemDescriptor;
use crate::value_objects::SlotKey;

/// What a slot currently holds.
///
/// A slot either holds an item, marks itself as the secondary half of a
/// two-slot item whose primary is elsewhere, or is empty. Never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotContent {
    #[default]
    Empty,
    Item(ItemDescriptor),
    /// Secondary half of the two-slot item held by the named primary slot
    OccupiedBy(SlotKey),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    key: SlotKey,
    content: SlotContent,
}

impl Slot {
    pub fn empty(key: SlotKey) -> Self {
        Self {
            key,
            content: SlotContent::Empty,
        }
    }

    pub fn with_content(key: SlotKey, content: SlotContent) -> Self {
        Self { key, content }
    }

    pub fn key(&self) -> &SlotKey {
        &self.key
    }

    pub fn content(&self) -> &SlotContent {
        &self.content
    }

    /// No item and no secondary marker.
    pub fn is_available(&self) -> bool {
        matches!(self.content, SlotContent::Empty)
    }

    pub fn item(&self) -> Option<&ItemDescriptor> {
        match &self.content {
            SlotContent::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Primary slot this slot is the secondary of.
    pub fn occupied_by(&self) -> Option<&SlotKey> {
        match &self.content {
            SlotContent::OccupiedBy(primary) => Some(primary),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, content: SlotContent) {
        self.content = content;
    }

    pub(crate) fn take(&mut self) -> SlotContent {
        std::mem::take(&mut self.content)
    }

    pub(crate) fn rekey(mut self, key: SlotKey) -> Self {
        self.key = key;
        self
    }
}

/// Stored form of a slot, as the web client persists it.
///
/// `{ "name": "4", "item": null, "occupiedBy": "1" }`. Stored data may carry
/// both `item` and `occupiedBy`; the item wins when converted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<SlotKey>,
    #[serde(default)]
    pub item: Option<ItemDescriptor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupied_by: Option<SlotKey>,
}

impl SlotRecord {
    pub(crate) fn into_content(self) -> SlotContent {
        match (self.item, self.occupied_by) {
            (Some(item), _) => SlotContent::Item(item),
            (None, Some(primary)) => SlotContent::OccupiedBy(primary),
            (None, None) => SlotContent::Empty,
        }
    }
}

impl From<&Slot> for SlotRecord {
    fn from(slot: &Slot) -> Self {
        let (item, occupied_by) = match &slot.content {
            SlotContent::Empty => (None, None),
            SlotContent::Item(item) => (Some(item.clone()), None),
            SlotContent::OccupiedBy(primary) => (None, Some(primary.clone())),
        };
        Self {
            name: Some(slot.key.clone()),
            item,
            occupied_by,
        }
    }
}
