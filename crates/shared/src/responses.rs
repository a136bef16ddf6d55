//! Response bodies of the remote content API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::content::{ContentCategory, CustomItem};

/// Body of `GET /api/sync`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SyncData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Custom content grouped by category. Absent categories were not sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub armor: Option<Vec<CustomItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weapons: Option<Vec<CustomItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utility: Option<Vec<CustomItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spells: Option<Vec<CustomItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<CustomItem>>,
    /// Custom hirelings; opaque to the sheet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hirelings: Option<Vec<Value>>,
}

impl SyncData {
    /// Data holding a single category, as returned by a category sync.
    pub fn single(category: ContentCategory, items: Vec<CustomItem>) -> Self {
        let mut data = Self::default();
        *data.slot_mut(category) = Some(items);
        data
    }

    pub fn get(&self, category: ContentCategory) -> Option<&[CustomItem]> {
        match category {
            ContentCategory::Armor => self.armor.as_deref(),
            ContentCategory::Weapons => self.weapons.as_deref(),
            ContentCategory::Utility => self.utility.as_deref(),
            ContentCategory::Spells => self.spells.as_deref(),
            ContentCategory::Conditions => self.conditions.as_deref(),
        }
    }

    fn slot_mut(&mut self, category: ContentCategory) -> &mut Option<Vec<CustomItem>> {
        match category {
            ContentCategory::Armor => &mut self.armor,
            ContentCategory::Weapons => &mut self.weapons,
            ContentCategory::Utility => &mut self.utility,
            ContentCategory::Spells => &mut self.spells,
            ContentCategory::Conditions => &mut self.conditions,
        }
    }

    /// Total number of items across categories, hirelings included.
    pub fn item_count(&self) -> usize {
        ContentCategory::ALL
            .iter()
            .filter_map(|category| self.get(*category))
            .map(<[CustomItem]>::len)
            .sum::<usize>()
            + self.hirelings.as_ref().map_or(0, Vec::len)
    }
}

/// Body of `GET /api/sync/{category}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CustomItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/items/{category}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
