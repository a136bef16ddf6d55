//! Occupancy mutator
//!
//! Snapshot-in, snapshot-out. Each function clones what it needs and returns a
//! new [`Inventory`]; the caller decides whether to commit it. Bank results
//! are always compacted.

use std::collections::HashMap;

use super::addressing::secondary_slot;
use super::bank;
use super::kind::InventoryKind;
use super::placement::Placement;
use super::slot::{Slot, SlotContent};
use super::snapshot::Inventory;
use crate::entities::ItemDescriptor;
use crate::error::PlacementRejection;
use crate::value_objects::SlotKey;

/// Result of [`remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub inventory: Inventory,
    /// The item taken out, `None` if the slot was already empty
    pub removed: Option<ItemDescriptor>,
}

/// Writes `item` into `target`.
///
/// Two-slot items get the placement's orientation recorded on the descriptor
/// and their secondary slot marked `occupiedBy = target`. The placement is
/// re-checked against the snapshot, so a stale placement is rejected rather
/// than written over another item.
pub fn place(
    inventory: &Inventory,
    target: &SlotKey,
    mut item: ItemDescriptor,
    placement: Placement,
) -> Result<Inventory, PlacementRejection> {
    if !inventory.contains(target) {
        return Err(PlacementRejection::InvalidTarget(target.clone()));
    }
    if !inventory.is_available(target) {
        return Err(PlacementRejection::SlotOccupied(target.clone()));
    }

    let secondary = if item.is_double() {
        let orientation = placement
            .orientation()
            .ok_or_else(|| PlacementRejection::NoAdjacentSlot(target.clone()))?;
        let secondary = secondary_slot(inventory.kind(), target, orientation)
            .filter(|key| inventory.is_available(key))
            .ok_or_else(|| PlacementRejection::NoAdjacentSlot(target.clone()))?;
        item.orientation = Some(orientation);
        Some(secondary)
    } else {
        item.orientation = None;
        None
    };

    let mut next = inventory.clone();
    next.set_content(target, SlotContent::Item(item));
    if let Some(secondary) = secondary {
        next.set_content(&secondary, SlotContent::OccupiedBy(target.clone()));
    }
    Ok(settle(next))
}

/// Clears the item at `key`, together with its secondary slot.
///
/// A key naming the secondary half of a live two-slot item removes that item.
/// Removing from an empty slot, or from a marker that no live item accounts
/// for, succeeds with `removed: None`.
pub fn remove(inventory: &Inventory, key: &SlotKey) -> Result<Removal, PlacementRejection> {
    let slot = inventory
        .slot(key)
        .ok_or_else(|| PlacementRejection::InvalidTarget(key.clone()))?;

    // A marker is followed only if `key` is the owner's computed secondary;
    // a stray marker is just cleared.
    let primary = match slot.content() {
        SlotContent::OccupiedBy(primary)
            if inventory
                .slot(primary)
                .and_then(Slot::item)
                .and_then(ItemDescriptor::effective_orientation)
                .and_then(|orientation| secondary_slot(inventory.kind(), primary, orientation))
                .as_ref()
                == Some(key) =>
        {
            primary.clone()
        }
        _ => key.clone(),
    };

    let mut next = inventory.clone();
    let removed = match next.slot_mut(&primary).map(Slot::take) {
        Some(SlotContent::Item(item)) => Some(item),
        _ => None,
    };

    let secondary = removed
        .as_ref()
        .and_then(ItemDescriptor::effective_orientation)
        .and_then(|orientation| secondary_slot(inventory.kind(), &primary, orientation));
    if let Some(secondary) = secondary {
        if next.slot(&secondary).and_then(Slot::occupied_by) == Some(&primary) {
            next.set_content(&secondary, SlotContent::Empty);
        }
    }

    Ok(Removal {
        inventory: settle(next),
        removed,
    })
}

/// Clears every `occupiedBy` marker not backed by a live two-slot item.
///
/// A marker survives only if its slot is exactly the secondary slot computed
/// from the primary's stored orientation. Idempotent. Banks come back
/// compacted.
pub fn reconcile_orphans(inventory: &Inventory) -> Inventory {
    let kind = inventory.kind();
    let expected: HashMap<SlotKey, &SlotKey> = inventory
        .items()
        .filter_map(|(key, item)| {
            let orientation = item.effective_orientation()?;
            secondary_slot(kind, key, orientation).map(|secondary| (secondary, key))
        })
        .collect();

    let slots = inventory
        .slots()
        .iter()
        .map(|slot| match slot.occupied_by() {
            Some(primary) if expected.get(slot.key()) != Some(&primary) => {
                Slot::empty(slot.key().clone())
            }
            _ => slot.clone(),
        })
        .collect();
    settle(Inventory::with_slots(kind, slots))
}

fn settle(inventory: Inventory) -> Inventory {
    match inventory.kind() {
        InventoryKind::Bank => {
            Inventory::with_slots(InventoryKind::Bank, bank::compact(inventory.into_slots()))
        }
        _ => inventory,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{Orientation, SlotCount};

    fn key(n: u8) -> SlotKey {
        SlotKey::from(n)
    }

    fn sword() -> ItemDescriptor {
        ItemDescriptor::item("Heavy sword").with_slots(SlotCount::Two)
    }

    fn marker(inventory: &Inventory, n: u8) -> Option<&SlotKey> {
        inventory.slot(&key(n)).and_then(Slot::occupied_by)
    }

    #[test]
    fn place_marks_the_secondary_slot() {
        let pack = place(
            &Inventory::pack(),
            &key(2),
            sword(),
            Placement::Double(Orientation::Vertical),
        )
        .unwrap();

        let held = pack.slot(&key(2)).and_then(Slot::item).unwrap();
        assert_eq!(held.orientation, Some(Orientation::Vertical));
        assert_eq!(marker(&pack, 5), Some(&key(2)));
        assert!(pack.is_available(&key(3)));
    }

    #[test]
    fn place_rejects_a_stale_placement() {
        let pack = place(&Inventory::pack(), &key(2), ItemDescriptor::item("Torch"), Placement::Single)
            .unwrap();
        let err = place(&pack, &key(1), sword(), Placement::Double(Orientation::Horizontal));
        assert_eq!(err, Err(PlacementRejection::NoAdjacentSlot(key(1))));
    }

    #[test]
    fn single_slot_items_drop_any_orientation() {
        let torch = ItemDescriptor::item("Torch").with_orientation(Orientation::Vertical);
        let pack = place(&Inventory::pack(), &key(4), torch, Placement::Single).unwrap();
        assert_eq!(pack.slot(&key(4)).and_then(Slot::item).unwrap().orientation, None);
    }

    #[test]
    fn remove_through_the_secondary_slot() {
        let pack = place(
            &Inventory::pack(),
            &key(4),
            sword(),
            Placement::Double(Orientation::Horizontal),
        )
        .unwrap();

        let removal = remove(&pack, &key(5)).unwrap();
        assert_eq!(removal.inventory, Inventory::pack());
        assert_eq!(removal.removed.map(|item| item.title), Some("Heavy sword".to_string()));
    }

    #[test]
    fn remove_empty_slot_is_a_no_op() {
        let removal = remove(&Inventory::grit(), &SlotKey::new("grit__1")).unwrap();
        assert_eq!(removal.inventory, Inventory::grit());
        assert_eq!(removal.removed, None);

        assert_eq!(
            remove(&Inventory::grit(), &SlotKey::new("grit__9")),
            Err(PlacementRejection::InvalidTarget(SlotKey::new("grit__9")))
        );
    }

    #[test]
    fn remove_on_a_stray_marker_keeps_the_item() {
        let mut pack = place(
            &Inventory::pack(),
            &key(1),
            sword(),
            Placement::Double(Orientation::Horizontal),
        )
        .unwrap();
        pack.set_content(&key(4), SlotContent::OccupiedBy(key(1)));

        let removal = remove(&pack, &key(4)).unwrap();
        assert_eq!(removal.removed, None);
        assert!(removal.inventory.is_available(&key(4)));
        assert_eq!(
            removal.inventory.slot(&key(1)).and_then(Slot::item).map(|i| i.title.as_str()),
            Some("Heavy sword")
        );
        assert_eq!(marker(&removal.inventory, 2), Some(&key(1)));
    }

    #[test]
    fn legacy_two_slot_item_without_orientation_is_horizontal() {
        let mut pack = Inventory::pack();
        pack.set_content(&key(1), SlotContent::Item(sword()));
        pack.set_content(&key(2), SlotContent::OccupiedBy(key(1)));

        let removal = remove(&pack, &key(1)).unwrap();
        assert_eq!(removal.inventory, Inventory::pack());
    }

    #[test]
    fn reconcile_clears_orphans_and_wrong_primaries() {
        let mut pack = place(
            &Inventory::pack(),
            &key(1),
            sword(),
            Placement::Double(Orientation::Horizontal),
        )
        .unwrap();
        // no primary at all
        pack.set_content(&key(6), SlotContent::OccupiedBy(key(3)));
        // points at a real primary, but not its secondary
        pack.set_content(&key(4), SlotContent::OccupiedBy(key(1)));

        let repaired = reconcile_orphans(&pack);
        assert_eq!(marker(&repaired, 2), Some(&key(1)));
        assert!(repaired.is_available(&key(4)));
        assert!(repaired.is_available(&key(6)));
        assert_eq!(reconcile_orphans(&repaired), repaired);
    }

    #[test]
    fn bank_place_grows_and_remove_compacts() {
        let bank = place(
            &Inventory::bank(),
            &SlotKey::bank(0),
            ItemDescriptor::item("Rope"),
            Placement::Single,
        )
        .unwrap();
        let bank = place(&bank, &SlotKey::bank(1), ItemDescriptor::item("Pole"), Placement::Single)
            .unwrap();
        assert_eq!(bank.slots().len(), 3);
        assert!(bank.is_available(&SlotKey::bank(2)));

        let removal = remove(&bank, &SlotKey::bank(0)).unwrap();
        let titles: Vec<&str> = removal
            .inventory
            .items()
            .map(|(_, item)| item.title.as_str())
            .collect();
        assert_eq!(titles, ["Pole"]);
        assert_eq!(removal.inventory.slots().len(), 2);
    }
}
