//! File-backed key/value storage
//!
//! Stores key-value pairs in a JSON file at:
//! - Linux: ~/.config/mrsheet/storage.json
//! - macOS: ~/Library/Application Support/io.mrsheet.player/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\mrsheet\player\storage.json

use directories::ProjectDirs;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::infrastructure::ports::{RepoError, StoragePort};

/// Storage file used when no platform config directory is available.
pub const FALLBACK_STORAGE_FILE: &str = "mrsheet_storage.json";

/// Platform-specific default location of the storage file.
pub fn default_storage_path() -> PathBuf {
    match ProjectDirs::from("io", "mrsheet", "player") {
        Some(dirs) => dirs.config_dir().join("storage.json"),
        None => PathBuf::from(FALLBACK_STORAGE_FILE),
    }
}

/// JSON file storage with an in-memory cache.
#[derive(Clone)]
pub struct FileStorage {
    storage_path: PathBuf,
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl FileStorage {
    /// Opens the storage file at `storage_path`.
    ///
    /// A missing or unreadable file starts an empty store; it is created on
    /// the first write.
    pub fn open(storage_path: impl Into<PathBuf>) -> Self {
        let storage_path = storage_path.into();
        let cache = load_file(&storage_path);
        tracing::debug!(path = ?storage_path, entries = cache.len(), "File storage initialized");
        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.storage_path
    }

    fn persist(&self) -> Result<(), RepoError> {
        if let Some(parent) = self.storage_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| RepoError::storage("create_dir", e))?;
            }
        }

        let data = {
            let cache = self
                .cache
                .read()
                .map_err(|e| RepoError::storage("persist", e))?;
            serde_json::to_string_pretty(&*cache).map_err(RepoError::serialization)?
        };
        fs::write(&self.storage_path, data).map_err(|e| RepoError::storage("write", e))
    }
}

fn load_file(path: &Path) -> HashMap<String, String> {
    if !path.exists() {
        return HashMap::new();
    }
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
            Ok(map) => map,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to parse storage file");
                HashMap::new()
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read storage file");
            HashMap::new()
        }
    }
}

impl StoragePort for FileStorage {
    fn save(&self, key: &str, value: &str) -> Result<(), RepoError> {
        {
            let mut guard = self
                .cache
                .write()
                .map_err(|e| RepoError::storage("save", e))?;
            guard.insert(key.to_string(), value.to_string());
        }
        self.persist()
    }

    fn load(&self, key: &str) -> Result<Option<String>, RepoError> {
        let guard = self
            .cache
            .read()
            .map_err(|e| RepoError::storage("load", e))?;
        Ok(guard.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<(), RepoError> {
        {
            let mut guard = self
                .cache
                .write()
                .map_err(|e| RepoError::storage("remove", e))?;
            guard.remove(key);
        }
        self.persist()
    }
}
