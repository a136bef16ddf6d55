//! Placement resolver
//!
//! Pure queries: nothing here changes an inventory. The UI can call
//! [`resolve_drop`] for live "can drop here" feedback and the router calls
//! it again before committing.

use super::addressing::secondary_slot;
use super::gating::DestinationKind;
use super::snapshot::Inventory;
use crate::entities::ItemDescriptor;
use crate::error::PlacementRejection;
use crate::value_objects::{Orientation, SlotCount, SlotKey};

/// An accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// One-slot item, no orientation
    Single,
    /// Two-slot item and the axis its secondary slot lies on
    Double(Orientation),
}

impl Placement {
    pub fn orientation(self) -> Option<Orientation> {
        match self {
            Self::Single => None,
            Self::Double(orientation) => Some(orientation),
        }
    }

    pub fn slot_count(self) -> SlotCount {
        match self {
            Self::Single => SlotCount::One,
            Self::Double(_) => SlotCount::Two,
        }
    }
}

/// Decides whether an item needing `required` slots fits at `target`.
///
/// Two-slot items try horizontal first and vertical second; the first
/// orientation whose secondary slot exists and is free wins. Inventories with
/// no adjacency therefore never accept them.
pub fn resolve_placement(
    inventory: &Inventory,
    target: &SlotKey,
    required: SlotCount,
) -> Result<Placement, PlacementRejection> {
    let slot = inventory
        .slot(target)
        .ok_or_else(|| PlacementRejection::InvalidTarget(target.clone()))?;
    if !slot.is_available() {
        return Err(PlacementRejection::SlotOccupied(target.clone()));
    }

    match required {
        SlotCount::One => Ok(Placement::Single),
        SlotCount::Two => Orientation::PREFERENCE
            .into_iter()
            .find(|&orientation| {
                secondary_slot(inventory.kind(), target, orientation)
                    .is_some_and(|secondary| inventory.is_available(&secondary))
            })
            .map(Placement::Double)
            .ok_or_else(|| PlacementRejection::NoAdjacentSlot(target.clone())),
    }
}

/// Category gating followed by [`resolve_placement`] for `item`.
pub fn resolve_drop(
    inventory: &Inventory,
    target: &SlotKey,
    item: &ItemDescriptor,
) -> Result<Placement, PlacementRejection> {
    DestinationKind::from(inventory.kind()).check(item.group)?;
    resolve_placement(inventory, target, item.slots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::occupancy::place;

    fn key(n: u8) -> SlotKey {
        SlotKey::from(n)
    }

    fn with_item_at(inventory: Inventory, n: u8) -> Inventory {
        place(&inventory, &key(n), ItemDescriptor::item("Rock"), Placement::Single).unwrap()
    }

    #[test]
    fn single_slot_needs_an_existing_free_slot() {
        let pack = Inventory::pack();
        assert_eq!(
            resolve_placement(&pack, &key(5), SlotCount::One),
            Ok(Placement::Single)
        );
        assert_eq!(
            resolve_placement(&pack, &key(7), SlotCount::One),
            Err(PlacementRejection::InvalidTarget(key(7)))
        );

        let pack = with_item_at(pack, 5);
        assert_eq!(
            resolve_placement(&pack, &key(5), SlotCount::One),
            Err(PlacementRejection::SlotOccupied(key(5)))
        );
    }

    #[test]
    fn horizontal_is_preferred() {
        let pack = Inventory::pack();
        assert_eq!(
            resolve_placement(&pack, &key(1), SlotCount::Two),
            Ok(Placement::Double(Orientation::Horizontal))
        );
    }

    #[test]
    fn falls_back_to_vertical() {
        let pack = with_item_at(Inventory::pack(), 2);
        assert_eq!(
            resolve_placement(&pack, &key(1), SlotCount::Two),
            Ok(Placement::Double(Orientation::Vertical))
        );
        // Last column has no horizontal neighbour
        assert_eq!(
            resolve_placement(&Inventory::pack(), &key(3), SlotCount::Two),
            Ok(Placement::Double(Orientation::Vertical))
        );
    }

    #[test]
    fn bottom_row_end_has_no_room() {
        assert_eq!(
            resolve_placement(&Inventory::pack(), &key(6), SlotCount::Two),
            Err(PlacementRejection::NoAdjacentSlot(key(6)))
        );
    }

    #[test]
    fn non_grid_inventories_refuse_two_slot_items() {
        let body = Inventory::body();
        assert_eq!(
            resolve_placement(&body, &SlotKey::new("mainPaw"), SlotCount::Two),
            Err(PlacementRejection::NoAdjacentSlot(SlotKey::new("mainPaw")))
        );
        let bank = Inventory::bank();
        assert!(resolve_placement(&bank, &SlotKey::bank(0), SlotCount::Two).is_err());
    }

    #[test]
    fn resolve_drop_gates_before_occupancy() {
        let body = Inventory::body();
        let condition = ItemDescriptor::condition("Exhausted");
        assert_eq!(
            resolve_drop(&body, &SlotKey::new("nowhere"), &condition),
            Err(PlacementRejection::CategoryMismatch {
                group: condition.group,
                destination: DestinationKind::Body,
            })
        );
        assert_eq!(
            resolve_drop(&Inventory::grit(), &SlotKey::new("grit__2"), &condition),
            Ok(Placement::Single)
        );
    }
}
