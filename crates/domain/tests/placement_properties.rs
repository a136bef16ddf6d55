//! Whole-engine checks of the placement rules, driven through the public API.

use mrsheet_domain::{
    place, reconcile_orphans, remove, resolve_drop, resolve_placement, DestinationKind,
    Inventory, InventoryKind, ItemDescriptor, Orientation, Placement, PlacementRejection, Slot,
    SlotContent, SlotCount, SlotKey, SlotRecord,
};

fn key(n: u8) -> SlotKey {
    SlotKey::from(n)
}

fn one(title: &str) -> ItemDescriptor {
    ItemDescriptor::item(title)
}

fn two(title: &str) -> ItemDescriptor {
    ItemDescriptor::item(title).with_slots(SlotCount::Two)
}

/// Every `occupiedBy = k` marker points at a two-slot item in `k` whose
/// secondary slot is the marker's own slot.
fn markers_are_consistent(inventory: &Inventory) -> bool {
    inventory.slots().iter().all(|slot| match slot.occupied_by() {
        None => true,
        Some(primary) => inventory
            .slot(primary)
            .and_then(Slot::item)
            .and_then(ItemDescriptor::effective_orientation)
            .and_then(|o| {
                mrsheet_domain::inventory::secondary_slot(inventory.kind(), primary, o)
            })
            .is_some_and(|secondary| &secondary == slot.key()),
    })
}

fn drop_item(inventory: &Inventory, target: &SlotKey, item: ItemDescriptor) -> Inventory {
    let placement = resolve_drop(inventory, target, &item).unwrap();
    place(inventory, target, item, placement).unwrap()
}

/// A pack built from stored data that disagrees with itself.
fn inconsistent_pack() -> Inventory {
    let record = |item: Option<ItemDescriptor>, occupied_by: Option<u8>| SlotRecord {
        name: None,
        item,
        occupied_by: occupied_by.map(key),
    };
    Inventory::from_records(
        InventoryKind::Pack,
        vec![
            (key(1), record(Some(two("Spear").with_orientation(Orientation::Vertical)), None)),
            (key(2), record(None, Some(1))),
            (key(4), record(None, Some(1))),
            (key(5), record(None, Some(3))),
            (key(6), record(Some(one("Torch")), Some(5))),
        ],
    )
}

#[test]
fn markers_stay_consistent_through_a_session() {
    let mut pack = Inventory::pack();
    let steps: Vec<Box<dyn Fn(&Inventory) -> Inventory>> = vec![
        Box::new(|p| drop_item(p, &key(1), two("Spear"))),
        Box::new(|p| drop_item(p, &key(3), two("Pole"))),
        Box::new(|p| drop_item(p, &key(4), one("Torch"))),
        Box::new(|p| remove(p, &key(2)).unwrap().inventory),
        Box::new(|p| drop_item(p, &key(5), one("Rations"))),
        Box::new(|p| remove(p, &key(6)).unwrap().inventory),
        Box::new(|p| drop_item(p, &key(1), two("Bow"))),
    ];
    for step in steps {
        pack = step(&pack);
        assert!(markers_are_consistent(&pack), "inconsistent: {pack:?}");
    }
}

#[test]
fn reconcile_is_idempotent() {
    let once = reconcile_orphans(&inconsistent_pack());
    assert_eq!(reconcile_orphans(&once), once);
    assert!(markers_are_consistent(&once));

    // Only the spear's real secondary survives
    assert_eq!(once.slot(&key(4)).and_then(Slot::occupied_by), Some(&key(1)));
    assert!(once.is_available(&key(2)));
    assert!(once.is_available(&key(5)));
}

#[test]
fn place_then_remove_restores_the_snapshot() {
    let before = drop_item(&Inventory::pack(), &key(2), one("Lantern"));

    for (target, orientation) in [
        (key(4), Orientation::Horizontal),
        (key(1), Orientation::Vertical),
        (key(3), Orientation::Vertical),
    ] {
        let placed = place(&before, &target, two("Spear"), Placement::Double(orientation)).unwrap();
        let removal = remove(&placed, &target).unwrap();
        assert_eq!(removal.inventory, before);
        assert_eq!(
            removal.removed.and_then(|item| item.orientation),
            Some(orientation)
        );
    }
}

#[test]
fn horizontal_wins_when_both_fit() {
    let pack = Inventory::pack();
    assert_eq!(
        resolve_placement(&pack, &key(1), SlotCount::Two),
        Ok(Placement::Double(Orientation::Horizontal))
    );

    let pack = drop_item(&pack, &key(1), two("Spear"));
    assert_eq!(pack.slot(&key(2)).and_then(Slot::occupied_by), Some(&key(1)));
    assert!(pack.is_available(&key(4)));
}

#[test]
fn end_of_row_with_blocked_column_is_rejected() {
    let pack = drop_item(&Inventory::pack(), &key(6), one("Torch"));
    let before = pack.clone();

    assert_eq!(
        resolve_placement(&pack, &key(3), SlotCount::Two),
        Err(PlacementRejection::NoAdjacentSlot(key(3)))
    );
    assert!(place(&pack, &key(3), two("Spear"), Placement::Double(Orientation::Vertical)).is_err());
    assert_eq!(pack, before);
}

#[test]
fn bank_removal_compacts_in_order() {
    let mut bank = Inventory::bank();
    for (index, title) in ["Rope", "Pipe", "Coin purse", "Candles"].into_iter().enumerate() {
        bank = drop_item(&bank, &SlotKey::bank(index), one(title));
    }
    assert_eq!(bank.slots().len(), 5);

    let removal = remove(&bank, &SlotKey::bank(2)).unwrap();
    assert_eq!(removal.removed.map(|i| i.title), Some("Coin purse".to_string()));

    let slots = removal.inventory.slots();
    let layout: Vec<(&str, Option<&str>)> = slots
        .iter()
        .map(|slot| (slot.key().as_str(), slot.item().map(|i| i.title.as_str())))
        .collect();
    assert_eq!(
        layout,
        [
            ("bnk__0", Some("Rope")),
            ("bnk__1", Some("Pipe")),
            ("bnk__2", Some("Candles")),
            ("bnk__3", None),
        ]
    );
}

#[test]
fn conditions_never_enter_the_body() {
    let condition = ItemDescriptor::condition("Frightened");
    let full_body = drop_item(&Inventory::body(), &SlotKey::new("mainPaw"), one("Needle"));

    for body in [Inventory::body(), full_body] {
        for slot in body.slots() {
            assert_eq!(
                resolve_drop(&body, slot.key(), &condition),
                Err(PlacementRejection::CategoryMismatch {
                    group: condition.group,
                    destination: DestinationKind::Body,
                })
            );
        }
    }
}

#[test]
fn slot_content_is_never_both() {
    let pack = reconcile_orphans(&inconsistent_pack());
    // slot 6 was stored with both an item and a marker; the item is kept
    let six = pack.slot(&key(6)).map(Slot::content);
    assert!(matches!(six, Some(SlotContent::Item(item)) if item.title == "Torch"));
}
