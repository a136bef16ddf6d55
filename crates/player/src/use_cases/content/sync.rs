//! Pulls custom content from the remote service into the local store.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use mrsheet_shared::{ContentCategory, CustomItem, SyncData};

use super::custom_data::{CustomDataStore, SyncStatus};
use crate::infrastructure::ports::{ApiCredentials, ApiError, ContentApiPort};

/// Result of a remote content routine.
///
/// Failures are reported here, never as an `Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncReport {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SyncData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncReport {
    pub fn ok(data: Option<SyncData>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl ToString) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.to_string()),
        }
    }
}

pub struct ContentSync {
    api: Arc<dyn ContentApiPort>,
    store: Arc<RwLock<CustomDataStore>>,
}

impl ContentSync {
    pub fn new(api: Arc<dyn ContentApiPort>, store: Arc<RwLock<CustomDataStore>>) -> Self {
        Self { api, store }
    }

    async fn credentials(&self) -> Result<ApiCredentials, ApiError> {
        self.store
            .read()
            .await
            .credentials()
            .ok_or(ApiError::MissingCredentials)
    }

    /// `true` when the service answers `/api/test` with a 2xx.
    pub async fn test_connection(&self) -> bool {
        let Ok(credentials) = self.credentials().await else {
            return false;
        };
        match self.api.test_connection(&credentials).await {
            Ok(reachable) => reachable,
            Err(e) => {
                error!(error = %e, "Connection test failed");
                false
            }
        }
    }

    /// Fetches every category and merges the non-empty ones.
    pub async fn sync_from_backend(&self) -> SyncReport {
        let credentials = match self.credentials().await {
            Ok(credentials) => credentials,
            Err(e) => return SyncReport::failed(e),
        };

        self.store
            .write()
            .await
            .update_sync_status(SyncStatus::Syncing, None);

        let outcome = self.api.fetch_all(&credentials).await.and_then(|response| {
            match (response.success, response.data) {
                (true, Some(data)) => Ok(data),
                (_, _) => Err(ApiError::Rejected(
                    response.error.unwrap_or_else(|| "Unknown error".to_string()),
                )),
            }
        });

        let mut store = self.store.write().await;
        match outcome {
            Ok(data) => {
                for category in ContentCategory::ALL {
                    if let Some(items) = data.get(category) {
                        store.add_custom_items(category, items.to_vec());
                    }
                }
                store.update_sync_status(SyncStatus::Success, None);
                info!(items = data.item_count(), "Custom content synchronized");
                SyncReport::ok(Some(data), "Synchronization completed successfully")
            }
            Err(e) => {
                warn!(error = %e, "Custom content sync failed");
                store.update_sync_status(SyncStatus::Error, Some(e.to_string()));
                SyncReport::failed(e)
            }
        }
    }

    /// Fetches one category. The sync status is left alone.
    pub async fn sync_category(&self, category: ContentCategory) -> SyncReport {
        let credentials = match self.credentials().await {
            Ok(credentials) => credentials,
            Err(e) => return SyncReport::failed(e),
        };

        let outcome = self
            .api
            .fetch_category(&credentials, category)
            .await
            .and_then(|response| match (response.success, response.items) {
                (true, Some(items)) => Ok(items),
                (_, _) => Err(ApiError::Rejected(
                    response.error.unwrap_or_else(|| "Unknown error".to_string()),
                )),
            });

        match outcome {
            Ok(items) => {
                info!(%category, items = items.len(), "Category synchronized");
                self.store
                    .write()
                    .await
                    .add_custom_items(category, items.clone());
                SyncReport::ok(
                    Some(SyncData::single(category, items)),
                    format!("{category} synchronized successfully"),
                )
            }
            Err(e) => {
                warn!(%category, error = %e, "Category sync failed");
                SyncReport::failed(e)
            }
        }
    }

    /// Sends a user-contributed item to the service.
    pub async fn submit_custom_item(
        &self,
        category: ContentCategory,
        item: &CustomItem,
    ) -> SyncReport {
        let credentials = match self.credentials().await {
            Ok(credentials) => credentials,
            Err(e) => return SyncReport::failed(e),
        };

        match self.api.submit_item(&credentials, category, item).await {
            Ok(response) => SyncReport {
                success: response.success,
                data: None,
                message: Some(
                    response
                        .message
                        .unwrap_or_else(|| "Item submitted successfully".to_string()),
                ),
                error: response.error,
            },
            Err(e) => {
                warn!(%category, title = %item.title, error = %e, "Item submission failed");
                SyncReport::failed(e)
            }
        }
    }
}
