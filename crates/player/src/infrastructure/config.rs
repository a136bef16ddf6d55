//! Player configuration from environment variables.

use std::path::PathBuf;

use crate::infrastructure::file_storage::default_storage_path;

/// Default origin used to build share links.
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:5173/#/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Content service base URL; overrides the stored one when set
    pub backend_url: Option<String>,
    /// Content service API key; overrides the stored one when set
    pub api_key: Option<String>,
    /// Page the share links point at
    pub share_base_url: String,
    pub storage_path: PathBuf,
}

impl PlayerConfig {
    /// Reads `MRSHEET_BACKEND_URL`, `MRSHEET_API_KEY`, `MRSHEET_SHARE_BASE_URL`
    /// and `MRSHEET_STORAGE_PATH`, falling back to defaults if not set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            backend_url: non_empty("MRSHEET_BACKEND_URL"),
            api_key: non_empty("MRSHEET_API_KEY"),
            share_base_url: non_empty("MRSHEET_SHARE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_SHARE_BASE_URL.to_string()),
            storage_path: non_empty("MRSHEET_STORAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(default_storage_path),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_when_unset() {
        let config = PlayerConfig::default();
        assert_eq!(config.backend_url, None);
        assert_eq!(config.share_base_url, DEFAULT_SHARE_BASE_URL);
        assert_eq!(config.storage_path, default_storage_path());
    }

    #[test]
    fn reads_values_and_ignores_blanks() {
        let vars: HashMap<&str, &str> = [
            ("MRSHEET_BACKEND_URL", "https://content.example"),
            ("MRSHEET_API_KEY", "   "),
            ("MRSHEET_STORAGE_PATH", "/tmp/sheet.json"),
        ]
        .into_iter()
        .collect();
        let config = PlayerConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend_url.as_deref(), Some("https://content.example"));
        assert_eq!(config.api_key, None);
        assert_eq!(config.storage_path, PathBuf::from("/tmp/sheet.json"));
    }
}
