//! Custom content store - backend settings and cached custom items.
//!
//! Every action persists the state (minus the transient sync status) under
//! [`storage_keys::CUSTOM_DATA`]. A persist failure is logged and the in-memory
//! state is kept.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use mrsheet_shared::{ContentCategory, CustomItem, CUSTOM_ITEM_SOURCE};

use crate::infrastructure::ports::{storage_keys, ApiCredentials, ClockPort, StoragePort};

/// Progress of the last full sync.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncStatus {
    #[default]
    Idle,
    Syncing,
    Success,
    Error,
}

/// Persisted part of the custom content store.
///
/// Missing or `null` fields read as their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomData {
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub backend_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_connected: bool,
    pub last_sync: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_armor: Vec<CustomItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_weapons: Vec<CustomItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_utility: Vec<CustomItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_spells: Vec<CustomItem>,
    #[serde(deserialize_with = "null_as_default")]
    pub custom_conditions: Vec<CustomItem>,
    /// Opaque hireling records
    #[serde(deserialize_with = "null_as_default")]
    pub custom_hirelings: Vec<Value>,
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

impl CustomData {
    pub fn items(&self, category: ContentCategory) -> &[CustomItem] {
        match category {
            ContentCategory::Armor => &self.custom_armor,
            ContentCategory::Weapons => &self.custom_weapons,
            ContentCategory::Utility => &self.custom_utility,
            ContentCategory::Spells => &self.custom_spells,
            ContentCategory::Conditions => &self.custom_conditions,
        }
    }

    fn items_mut(&mut self, category: ContentCategory) -> &mut Vec<CustomItem> {
        match category {
            ContentCategory::Armor => &mut self.custom_armor,
            ContentCategory::Weapons => &mut self.custom_weapons,
            ContentCategory::Utility => &mut self.custom_utility,
            ContentCategory::Spells => &mut self.custom_spells,
            ContentCategory::Conditions => &mut self.custom_conditions,
        }
    }
}

pub struct CustomDataStore {
    storage: Arc<dyn StoragePort>,
    clock: Arc<dyn ClockPort>,
    data: CustomData,
    sync_status: SyncStatus,
    sync_error: Option<String>,
}

impl CustomDataStore {
    /// Empty store; call [`load`](Self::load) to restore persisted data.
    pub fn new(storage: Arc<dyn StoragePort>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            storage,
            clock,
            data: CustomData::default(),
            sync_status: SyncStatus::Idle,
            sync_error: None,
        }
    }

    /// Restores persisted data. Missing or corrupt data leaves the store as it is.
    pub fn load(&mut self) {
        let stored = match self.storage.load(storage_keys::CUSTOM_DATA) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(e) => {
                tracing::error!(error = %e, "Failed to read custom data");
                return;
            }
        };
        match serde_json::from_str::<CustomData>(&stored) {
            Ok(data) => self.data = data,
            Err(e) => tracing::error!(error = %e, "Failed to parse custom data"),
        }
    }

    pub fn data(&self) -> &CustomData {
        &self.data
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }

    pub fn sync_error(&self) -> Option<&str> {
        self.sync_error.as_deref()
    }

    /// Backend URL and key, if both are set.
    pub fn credentials(&self) -> Option<ApiCredentials> {
        ApiCredentials::new(&self.data.backend_url, &self.data.api_key)
    }

    pub fn has_api_key(&self) -> bool {
        !self.data.api_key.is_empty()
    }

    pub fn has_custom_data(&self) -> bool {
        self.custom_data_count() > 0
    }

    pub fn custom_data_count(&self) -> usize {
        ContentCategory::ALL
            .iter()
            .map(|category| self.data.items(*category).len())
            .sum::<usize>()
            + self.data.custom_hirelings.len()
    }

    pub fn set_api_key(&mut self, key: impl Into<String>) {
        self.data.api_key = key.into();
        self.persist();
    }

    pub fn set_backend_url(&mut self, url: impl Into<String>) {
        self.data.backend_url = url.into();
        self.persist();
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.data.is_connected = connected;
        self.persist();
    }

    /// Merges `items` into the category by title. Existing titles are replaced
    /// in place, new ones appended; all are tagged as coming from the backend.
    pub fn add_custom_items(&mut self, category: ContentCategory, items: Vec<CustomItem>) {
        let merged = self.data.items_mut(category);
        for mut item in items {
            item.source = Some(CUSTOM_ITEM_SOURCE.to_string());
            match merged.iter_mut().find(|existing| existing.title == item.title) {
                Some(existing) => *existing = item,
                None => merged.push(item),
            }
        }
        self.persist();
    }

    pub fn remove_custom_item(&mut self, category: ContentCategory, title: &str) {
        self.data.items_mut(category).retain(|item| item.title != title);
        self.persist();
    }

    /// Drops every custom list and the last sync time. Settings are kept.
    pub fn clear_custom_data(&mut self) {
        for category in ContentCategory::ALL {
            self.data.items_mut(category).clear();
        }
        self.data.custom_hirelings.clear();
        self.data.last_sync = None;
        self.persist();
    }

    /// Success also stamps the sync time and marks the backend connected.
    pub fn update_sync_status(&mut self, status: SyncStatus, error: Option<String>) {
        self.sync_status = status;
        self.sync_error = error;
        if status == SyncStatus::Success {
            self.data.last_sync = Some(self.clock.now());
            self.data.is_connected = true;
        }
        self.persist();
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.data)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .save(storage_keys::CUSTOM_DATA, &json)
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            tracing::error!(error = %e, "Failed to persist custom data");
        }
    }
}
