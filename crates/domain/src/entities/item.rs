//! Item descriptor - what a slot holds
//!
//! Descriptors are plain data: the title identifies an item within its group,
//! and the remaining fields are the card details shown on the sheet. The only
//! fields the placement rules read are `group`, `slots` and `orientation`.

use serde::{Deserialize, Serialize};

use crate::value_objects::{ItemGroup, Orientation, SlotCount};

/// An item or condition card that can be dropped into a slot.
///
/// `orientation` is only meaningful for two-slot items and is written by the
/// occupancy mutator when the item is placed; whatever the caller passed in is
/// overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDescriptor {
    pub title: String,
    pub group: ItemGroup,
    #[serde(default)]
    pub slots: SlotCount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Usage dots already marked on the card
    #[serde(default, deserialize_with = "used_dots::deserialize")]
    pub used: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Card type (e.g. "weapon", "armor", "spell")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// How a condition is cleared
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear: Option<String>,
}

impl ItemDescriptor {
    pub fn new(title: impl Into<String>, group: ItemGroup) -> Self {
        Self {
            title: title.into(),
            group,
            slots: SlotCount::One,
            orientation: None,
            used: 0,
            stat: None,
            image: None,
            item_type: None,
            description: None,
            clear: None,
        }
    }

    /// Shorthand for an `items` group descriptor.
    pub fn item(title: impl Into<String>) -> Self {
        Self::new(title, ItemGroup::Items)
    }

    /// Shorthand for a `conditions` group descriptor.
    pub fn condition(title: impl Into<String>) -> Self {
        Self::new(title, ItemGroup::Conditions)
    }

    pub fn with_slots(mut self, slots: SlotCount) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_used(mut self, used: u32) -> Self {
        self.used = used;
        self
    }

    pub fn with_stat(mut self, stat: impl Into<String>) -> Self {
        self.stat = Some(stat.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = Some(item_type.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_clear(mut self, clear: impl Into<String>) -> Self {
        self.clear = Some(clear.into());
        self
    }

    /// Whether the item spans a primary and a secondary slot.
    pub fn is_double(&self) -> bool {
        self.slots == SlotCount::Two
    }

    /// Stored orientation, defaulting to horizontal for two-slot items saved
    /// before orientation was recorded.
    pub fn effective_orientation(&self) -> Option<Orientation> {
        if self.is_double() {
            Some(self.orientation.unwrap_or(Orientation::Horizontal))
        } else {
            None
        }
    }
}

/// The web client stores `used` as the text it read from a drag payload
/// (`"0"`, or `""` when unset), so both numbers and numeric strings are read.
mod used_dots {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Used {
        Count(u32),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        match Option::<Used>::deserialize(d)? {
            None => Ok(0),
            Some(Used::Count(count)) => Ok(count),
            Some(Used::Text(text)) if text.trim().is_empty() => Ok(0),
            Some(Used::Text(text)) => text
                .trim()
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid usage count: {text}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let item = ItemDescriptor::item("Spear")
            .with_slots(SlotCount::Two)
            .with_stat("d8")
            .with_type("weapon")
            .with_used(2);

        assert_eq!(item.group, ItemGroup::Items);
        assert!(item.is_double());
        assert_eq!(item.stat.as_deref(), Some("d8"));
        assert_eq!(item.used, 2);
    }

    #[test]
    fn legacy_two_slot_items_default_to_horizontal() {
        let item = ItemDescriptor::item("Spear").with_slots(SlotCount::Two);
        assert_eq!(item.effective_orientation(), Some(Orientation::Horizontal));

        let torch = ItemDescriptor::item("Torch").with_orientation(Orientation::Vertical);
        assert_eq!(torch.effective_orientation(), None);
    }

    #[test]
    fn deserializes_web_client_card() {
        let json = r#"{
            "title": "Exhausted",
            "group": "conditions",
            "clear": "After a long rest",
            "used": 0
        }"#;
        let item: ItemDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(item.group, ItemGroup::Conditions);
        assert_eq!(item.slots, SlotCount::One);
        assert_eq!(item.clear.as_deref(), Some("After a long rest"));
    }

    #[test]
    fn usage_count_reads_drag_payload_text() {
        let item: ItemDescriptor =
            serde_json::from_str(r#"{"title": "Torch", "group": "items", "used": "2"}"#).unwrap();
        assert_eq!(item.used, 2);

        for json in [
            r#"{"title": "Torch", "group": "items", "used": ""}"#,
            r#"{"title": "Torch", "group": "items", "used": null}"#,
        ] {
            let item: ItemDescriptor = serde_json::from_str(json).unwrap();
            assert_eq!(item.used, 0);
        }

        let bad = serde_json::from_str::<ItemDescriptor>(
            r#"{"title": "Torch", "group": "items", "used": "lots"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn serializes_type_field_name() {
        let item = ItemDescriptor::item("Needle").with_type("weapon");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "weapon");
        assert!(value.get("orientation").is_none());
    }
}
