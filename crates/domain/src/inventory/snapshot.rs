//! Inventory snapshots

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::Deserialize;
use std::collections::BTreeMap;

use super::bank;
use super::kind::InventoryKind;
use super::slot::{Slot, SlotContent, SlotRecord};
use crate::entities::ItemDescriptor;
use crate::value_objects::SlotKey;

/// An immutable snapshot of one inventory.
///
/// Slots are kept in topology order. Fixed kinds always contain exactly their
/// topology's keys; the bank always ends with a single empty slot. Mutations
/// live in [`super::occupancy`] and return a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    kind: InventoryKind,
    slots: Vec<Slot>,
}

impl Inventory {
    pub fn empty(kind: InventoryKind) -> Self {
        Self {
            kind,
            slots: kind.initial_keys().into_iter().map(Slot::empty).collect(),
        }
    }

    pub fn body() -> Self {
        Self::empty(InventoryKind::Body)
    }

    pub fn pack() -> Self {
        Self::empty(InventoryKind::Pack)
    }

    pub fn bank() -> Self {
        Self::empty(InventoryKind::Bank)
    }

    pub fn grit() -> Self {
        Self::empty(InventoryKind::Grit)
    }

    /// Rebuilds a snapshot from stored slot records.
    ///
    /// Fixed kinds are laid onto their topology: unknown keys are dropped and
    /// missing keys come back empty. Bank records are taken in order and
    /// compacted. Orphaned markers are left alone; run
    /// [`super::reconcile_orphans`] to repair them.
    pub fn from_records<I>(kind: InventoryKind, records: I) -> Self
    where
        I: IntoIterator<Item = (SlotKey, SlotRecord)>,
    {
        if !kind.is_fixed() {
            let slots = records
                .into_iter()
                .map(|(key, record)| Slot::with_content(key, record.into_content()))
                .collect();
            return Self {
                kind,
                slots: bank::compact(slots),
            };
        }

        let mut inventory = Self::empty(kind);
        for (key, record) in records {
            if let Some(slot) = inventory.slot_mut(&key) {
                slot.set(record.into_content());
            }
        }
        inventory
    }

    /// Stored form of every slot, in topology order.
    pub fn records(&self) -> impl Iterator<Item = SlotRecord> + '_ {
        self.slots.iter().map(SlotRecord::from)
    }

    pub fn kind(&self) -> InventoryKind {
        self.kind
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, key: &SlotKey) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.key() == key)
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.slot(key).is_some()
    }

    /// Whether `key` exists and holds neither an item nor a marker.
    pub fn is_available(&self, key: &SlotKey) -> bool {
        self.slot(key).is_some_and(Slot::is_available)
    }

    /// Items held, with the key of the slot holding each.
    pub fn items(&self) -> impl Iterator<Item = (&SlotKey, &ItemDescriptor)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.item().map(|item| (slot.key(), item)))
    }

    pub fn item_count(&self) -> usize {
        self.items().count()
    }

    pub(crate) fn with_slots(kind: InventoryKind, slots: Vec<Slot>) -> Self {
        Self { kind, slots }
    }

    pub(crate) fn into_slots(self) -> Vec<Slot> {
        self.slots
    }

    pub(crate) fn slot_mut(&mut self, key: &SlotKey) -> Option<&mut Slot> {
        self.slots.iter_mut().find(|slot| slot.key() == key)
    }

    pub(crate) fn set_content(&mut self, key: &SlotKey, content: SlotContent) -> bool {
        match self.slot_mut(key) {
            Some(slot) => {
                slot.set(content);
                true
            }
            None => false,
        }
    }

    /// Serializes as the web client's keyed object (`{"1": {...}, "2": {...}}`).
    pub fn serialize_keyed<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            self.slots
                .iter()
                .map(|slot| (slot.key().as_str(), SlotRecord::from(slot))),
        )
    }

    /// Serializes as the web client's ordered list (the bank).
    pub fn serialize_listed<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records())
    }

    pub fn deserialize_keyed<'de, D: Deserializer<'de>>(
        kind: InventoryKind,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw: Option<BTreeMap<String, SlotRecord>> = Option::deserialize(deserializer)?;
        let records = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(key, record)| (SlotKey::new(key), record));
        Ok(Self::from_records(kind, records))
    }

    pub fn deserialize_listed<'de, D: Deserializer<'de>>(
        kind: InventoryKind,
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let raw: Option<Vec<SlotRecord>> = Option::deserialize(deserializer)?;
        let records = raw.unwrap_or_default().into_iter().enumerate().map(|(index, record)| {
            let key = record.name.clone().unwrap_or_else(|| SlotKey::bank(index));
            (key, record)
        });
        Ok(Self::from_records(kind, records))
    }
}
