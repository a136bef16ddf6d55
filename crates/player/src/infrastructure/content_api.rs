//! HTTP client for the custom content service.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use mrsheet_shared::{CategoryResponse, ContentCategory, CustomItem, SubmitResponse, SyncResponse};

use crate::infrastructure::ports::{ApiCredentials, ApiError, ContentApiPort};

/// Default request timeout in seconds.
pub const DEFAULT_CONTENT_API_TIMEOUT_SECS: u64 = 30;

/// Client for the content service's REST API.
#[derive(Clone)]
pub struct HttpContentApi {
    client: Client,
}

impl HttpContentApi {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_CONTENT_API_TIMEOUT_SECS)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { client }
    }

    fn authorized(&self, builder: RequestBuilder, credentials: &ApiCredentials) -> RequestBuilder {
        builder
            .bearer_auth(&credentials.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    fn get(&self, credentials: &ApiCredentials, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", credentials.backend_url);
        self.authorized(self.client.get(url), credentials)
    }

    fn post(&self, credentials: &ApiCredentials, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", credentials.backend_url);
        self.authorized(self.client.post(url), credentials)
    }
}

impl Default for HttpContentApi {
    fn default() -> Self {
        Self::new()
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::RequestFailed(e.to_string()))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl ContentApiPort for HttpContentApi {
    async fn test_connection(&self, credentials: &ApiCredentials) -> Result<bool, ApiError> {
        let response = send(self.get(credentials, "/api/test")).await?;
        Ok(response.status().is_success())
    }

    async fn fetch_all(&self, credentials: &ApiCredentials) -> Result<SyncResponse, ApiError> {
        let response = send(self.get(credentials, "/api/sync")).await?;
        parse_json(response).await
    }

    async fn fetch_category(
        &self,
        credentials: &ApiCredentials,
        category: ContentCategory,
    ) -> Result<CategoryResponse, ApiError> {
        let path = format!("/api/sync/{category}");
        let response = send(self.get(credentials, &path)).await?;
        parse_json(response).await
    }

    async fn submit_item(
        &self,
        credentials: &ApiCredentials,
        category: ContentCategory,
        item: &CustomItem,
    ) -> Result<SubmitResponse, ApiError> {
        let path = format!("/api/items/{category}");
        let response = send(self.post(credentials, &path).json(item)).await?;
        parse_json(response).await
    }
}
