//! Bank compaction

use super::slot::{Slot, SlotContent};
use crate::value_objects::SlotKey;

/// Re-keys the bank's items to `bnk__0..n` in their current order, dropping
/// every gap, and appends exactly one empty trailing slot.
pub(crate) fn compact(slots: Vec<Slot>) -> Vec<Slot> {
    let mut compacted: Vec<Slot> = slots
        .into_iter()
        .filter(|slot| matches!(slot.content(), SlotContent::Item(_)))
        .enumerate()
        .map(|(index, slot)| slot.rekey(SlotKey::bank(index)))
        .collect();
    compacted.push(Slot::empty(SlotKey::bank(compacted.len())));
    compacted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ItemDescriptor;

    fn held(index: usize, title: &str) -> Slot {
        Slot::with_content(
            SlotKey::bank(index),
            SlotContent::Item(ItemDescriptor::item(title)),
        )
    }

    #[test]
    fn gaps_are_removed_and_one_trailing_slot_added() {
        let slots = vec![
            held(0, "Rope"),
            Slot::empty(SlotKey::bank(1)),
            held(2, "Lantern"),
            Slot::empty(SlotKey::bank(3)),
            Slot::empty(SlotKey::bank(4)),
        ];
        let compacted = compact(slots);

        let keys: Vec<&str> = compacted.iter().map(|s| s.key().as_str()).collect();
        assert_eq!(keys, ["bnk__0", "bnk__1", "bnk__2"]);
        assert_eq!(compacted[1].item().map(|i| i.title.as_str()), Some("Lantern"));
        assert!(compacted[2].is_available());
    }

    #[test]
    fn empty_bank_keeps_its_trailing_slot() {
        let compacted = compact(Vec::new());
        assert_eq!(compacted, vec![Slot::empty(SlotKey::bank(0))]);
    }

    #[test]
    fn stray_markers_do_not_survive() {
        let slots = vec![Slot::with_content(
            SlotKey::bank(0),
            SlotContent::OccupiedBy(SlotKey::bank(1)),
        )];
        assert_eq!(compact(slots), vec![Slot::empty(SlotKey::bank(0))]);
    }
}
