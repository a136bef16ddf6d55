//! Application state and composition.

use std::sync::Arc;

use tokio::sync::RwLock;

use mrsheet_domain::CharacterRecord;

use crate::infrastructure::{
    clock::SystemClock,
    config::PlayerConfig,
    memory_store::InMemorySheetStore,
    ports::{
        storage_keys, CharacterRepo, ClockPort, ContentApiPort, RepoError, SheetStorePort,
        StoragePort,
    },
};
use crate::use_cases::{self, ContentSync, CustomDataStore, ShareLinks};

/// Main application state.
pub struct App {
    pub sheet: Arc<InMemorySheetStore>,
    pub storage: Arc<dyn StoragePort>,
    pub custom_data: Arc<RwLock<CustomDataStore>>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub inventory: use_cases::InventoryUseCases,
    pub content: use_cases::ContentUseCases,
    pub share: Arc<ShareLinks>,
}

impl App {
    /// Wires the sheet, the custom content store and the use cases.
    ///
    /// The character and the custom data are restored from `storage`.
    /// Credentials from `config` take precedence over the stored ones.
    pub fn new(
        config: &PlayerConfig,
        storage: Arc<dyn StoragePort>,
        api: Arc<dyn ContentApiPort>,
    ) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());

        let sheet = Arc::new(InMemorySheetStore::from_record(load_character(
            storage.as_ref(),
        )));
        let sheet_port: Arc<dyn SheetStorePort> = sheet.clone();
        let character_repo: Arc<dyn CharacterRepo> = sheet.clone();

        let mut custom_data = CustomDataStore::new(storage.clone(), clock);
        custom_data.load();
        if let Some(url) = &config.backend_url {
            custom_data.set_backend_url(url.as_str());
        }
        if let Some(key) = &config.api_key {
            custom_data.set_api_key(key.as_str());
        }
        let custom_data = Arc::new(RwLock::new(custom_data));

        let use_cases = UseCases {
            inventory: use_cases::InventoryUseCases::new(Arc::new(
                use_cases::ApplyIntent::new(sheet_port),
            )),
            content: use_cases::ContentUseCases::new(Arc::new(ContentSync::new(
                api,
                custom_data.clone(),
            ))),
            share: Arc::new(ShareLinks::new(
                character_repo,
                config.share_base_url.clone(),
            )),
        };

        Self {
            sheet,
            storage,
            custom_data,
            use_cases,
        }
    }

    /// Writes the current character to storage.
    pub async fn save_character(&self) -> Result<(), RepoError> {
        let record = self.sheet.load_character().await?;
        let json = serde_json::to_string(&record).map_err(RepoError::serialization)?;
        self.storage.save(storage_keys::CHARACTER, &json)
    }
}

/// The stored character, or a blank one if nothing usable is stored.
fn load_character(storage: &dyn StoragePort) -> CharacterRecord {
    let stored = match storage.load(storage_keys::CHARACTER) {
        Ok(Some(stored)) => stored,
        Ok(None) => return CharacterRecord::new(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read stored character");
            return CharacterRecord::new();
        }
    };
    match serde_json::from_str::<CharacterRecord>(&stored) {
        Ok(record) => record.restored(),
        Err(e) => {
            tracing::warn!(error = %e, "Stored character is corrupt, starting blank");
            CharacterRecord::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockContentApiPort, MockStoragePort};
    use mockall::predicate::*;
    use mrsheet_domain::{Intent, InventoryOwner, InventoryRef, ItemDescriptor, SlotRef};
    use std::sync::Mutex;

    fn config() -> PlayerConfig {
        PlayerConfig {
            backend_url: Some("http://localhost:3000".into()),
            api_key: Some("secret".into()),
            ..PlayerConfig::default()
        }
    }

    #[tokio::test]
    async fn config_credentials_override_stored_ones() {
        let mut storage = MockStoragePort::new();
        storage.expect_load().returning(|_| Ok(None));
        storage.expect_save().returning(|_, _| Ok(()));

        let app = App::new(&config(), Arc::new(storage), Arc::new(MockContentApiPort::new()));
        let credentials = app.custom_data.read().await.credentials().unwrap();
        assert_eq!(credentials.backend_url, "http://localhost:3000");
        assert_eq!(credentials.api_key, "secret");
    }

    #[tokio::test]
    async fn corrupt_character_starts_blank_and_saves_back() {
        let saved = Arc::new(Mutex::new(None::<String>));
        let sink = saved.clone();

        let mut storage = MockStoragePort::new();
        storage
            .expect_load()
            .with(eq(storage_keys::CHARACTER))
            .returning(|_| Ok(Some("{not json".into())));
        storage.expect_load().returning(|_| Ok(None));
        storage
            .expect_save()
            .with(eq(storage_keys::CHARACTER), always())
            .returning(move |_, json| {
                *sink.lock().unwrap() = Some(json.to_string());
                Ok(())
            });
        storage.expect_save().returning(|_, _| Ok(()));

        let app = App::new(&config(), Arc::new(storage), Arc::new(MockContentApiPort::new()));
        let outcome = app
            .use_cases
            .inventory
            .apply_intent
            .execute(Intent::add(
                SlotRef::new(InventoryRef::Pack(InventoryOwner::Player), "1"),
                ItemDescriptor::item("Torch"),
            ))
            .await
            .unwrap();
        assert!(outcome.is_applied());

        app.save_character().await.unwrap();
        let saved = saved.lock().unwrap().clone().unwrap();
        assert!(saved.contains("Torch"));
    }
}
