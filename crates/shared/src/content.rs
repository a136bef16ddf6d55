//! Custom content categories and items

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use mrsheet_domain::{DomainError, ItemDescriptor, ItemGroup, SlotCount};

/// `source` tag given to every item merged from the content service.
pub const CUSTOM_ITEM_SOURCE: &str = "backend";

/// A category of custom content the service can serve.
///
/// Each category maps to exactly one custom list in the local content store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Armor,
    Weapons,
    Utility,
    Spells,
    Conditions,
}

impl ContentCategory {
    pub const ALL: [ContentCategory; 5] = [
        ContentCategory::Armor,
        ContentCategory::Weapons,
        ContentCategory::Utility,
        ContentCategory::Spells,
        ContentCategory::Conditions,
    ];

    /// Path segment used by the API (`/api/sync/{category}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapons => "weapons",
            Self::Utility => "utility",
            Self::Spells => "spells",
            Self::Conditions => "conditions",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::parse(format!("Unknown content category: {s}")))
    }
}

/// An item card served by the content service or created locally.
///
/// Fields the sheet does not know about are kept in `extra` so they survive a
/// store round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomItem {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub group: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<SlotCount>,
    /// Where the item came from (`"backend"` once merged from the service)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CustomItem {
    pub fn new(title: impl Into<String>, group: ItemGroup) -> Self {
        Self {
            title: title.into(),
            stat: None,
            image: None,
            item_type: String::new(),
            group: group.to_string(),
            used: None,
            description: None,
            clear: None,
            slots: None,
            source: None,
            extra: Map::new(),
        }
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_stat(mut self, stat: impl Into<String>) -> Self {
        self.stat = Some(stat.into());
        self
    }

    pub fn with_slots(mut self, slots: SlotCount) -> Self {
        self.slots = Some(slots);
        self
    }

    /// The descriptor to drag onto the sheet.
    ///
    /// Fails if `group` is neither `items` nor `conditions`.
    pub fn to_descriptor(&self) -> Result<ItemDescriptor, DomainError> {
        let group: ItemGroup = self.group.parse()?;
        let mut descriptor = ItemDescriptor::new(self.title.clone(), group)
            .with_slots(self.slots.unwrap_or_default())
            .with_used(self.used.unwrap_or(0));
        descriptor.stat = self.stat.clone();
        descriptor.image = self.image.clone();
        descriptor.item_type = Some(self.item_type.clone()).filter(|t| !t.is_empty());
        descriptor.description = self.description.clone();
        descriptor.clear = self.clear.clone();
        Ok(descriptor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("Spells".parse::<ContentCategory>().unwrap(), ContentCategory::Spells);
        assert!("hirelings".parse::<ContentCategory>().is_err());
        assert_eq!(ContentCategory::Armor.to_string(), "armor");
    }

    #[test]
    fn custom_item_keeps_unknown_fields() {
        let item: CustomItem = serde_json::from_value(json!({
            "title": "Hook arm",
            "type": "weapon",
            "group": "items",
            "stat": "d6",
            "slots": 2,
            "author": "pip"
        }))
        .unwrap();
        assert_eq!(item.item_type, "weapon");
        assert_eq!(item.slots, Some(SlotCount::Two));
        assert_eq!(item.extra["author"], "pip");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["author"], "pip");
        assert_eq!(back["type"], "weapon");
    }

    #[test]
    fn to_descriptor_maps_the_card() {
        let item = CustomItem::new("Hook arm", ItemGroup::Items)
            .with_type("weapon")
            .with_stat("d6")
            .with_slots(SlotCount::Two);
        let descriptor = item.to_descriptor().unwrap();
        assert!(descriptor.is_double());
        assert_eq!(descriptor.item_type.as_deref(), Some("weapon"));
        assert_eq!(descriptor.stat.as_deref(), Some("d6"));

        let mut broken = item;
        broken.group = "spells".into();
        assert!(broken.to_descriptor().is_err());
    }
}
