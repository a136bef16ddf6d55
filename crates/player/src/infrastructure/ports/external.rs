//! Remote content API port.

use async_trait::async_trait;
use mrsheet_shared::{CategoryResponse, ContentCategory, CustomItem, SubmitResponse, SyncResponse};

use super::error::ApiError;

/// Where the content service lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCredentials {
    pub backend_url: String,
    pub api_key: String,
}

impl ApiCredentials {
    /// `None` unless both the URL and the key are set.
    pub fn new(backend_url: &str, api_key: &str) -> Option<Self> {
        let backend_url = backend_url.trim();
        let api_key = api_key.trim();
        if backend_url.is_empty() || api_key.is_empty() {
            return None;
        }
        Some(Self {
            backend_url: backend_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

/// Custom content service. Every call carries `Authorization: Bearer <key>`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentApiPort: Send + Sync {
    /// `GET /api/test`; `Ok(true)` when the service answers with a 2xx.
    async fn test_connection(&self, credentials: &ApiCredentials) -> Result<bool, ApiError>;

    /// `GET /api/sync`
    async fn fetch_all(&self, credentials: &ApiCredentials) -> Result<SyncResponse, ApiError>;

    /// `GET /api/sync/{category}`
    async fn fetch_category(
        &self,
        credentials: &ApiCredentials,
        category: ContentCategory,
    ) -> Result<CategoryResponse, ApiError>;

    /// `POST /api/items/{category}`
    async fn submit_item(
        &self,
        credentials: &ApiCredentials,
        category: ContentCategory,
        item: &CustomItem,
    ) -> Result<SubmitResponse, ApiError>;
}
