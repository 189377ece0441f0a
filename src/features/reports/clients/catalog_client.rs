use async_trait::async_trait;
use serde_json::Value;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::{CreateTrashDto, TrashEntryDto};
use crate::shared::constants::{CATALOG_CREATE_PATH, CATALOG_LIST_PATH};
use crate::shared::http::{build_http_client, raw_rejection};

/// The catalog service: source of truth for reports
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch every report the catalog knows about
    async fn list_reports(&self) -> Result<Vec<TrashEntryDto>>;

    /// Register a report for an already uploaded image.
    ///
    /// Returns the parsed success body when it is valid JSON. A non-success
    /// status is `AppError::Rejected` carrying the raw response text.
    async fn add_report(&self, report: &CreateTrashDto) -> Result<Option<Value>>;
}

/// reqwest-backed [`Catalog`]
pub struct HttpCatalogClient {
    http_client: reqwest::Client,
    list_url: String,
    create_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(config)?,
            list_url: config.catalog_endpoint(CATALOG_LIST_PATH),
            create_url: config.catalog_endpoint(CATALOG_CREATE_PATH),
        })
    }
}

#[async_trait]
impl Catalog for HttpCatalogClient {
    async fn list_reports(&self) -> Result<Vec<TrashEntryDto>> {
        tracing::debug!("Fetching catalog from {}", self.list_url);

        let response = self.http_client.get(&self.list_url).send().await?;

        if !response.status().is_success() {
            let error = raw_rejection(response).await;
            tracing::error!("Catalog fetch failed: {}", error);
            return Err(error);
        }

        let entries = response.json::<Vec<TrashEntryDto>>().await.map_err(|e| {
            tracing::error!("Failed to parse catalog response: {}", e);
            AppError::InvalidResponse(format!("Failed to parse catalog response: {}", e))
        })?;

        tracing::debug!("Catalog returned {} reports", entries.len());
        Ok(entries)
    }

    async fn add_report(&self, report: &CreateTrashDto) -> Result<Option<Value>> {
        tracing::debug!("Registering report at {}: {:?}", self.create_url, report);

        let response = self
            .http_client
            .post(&self.create_url)
            .json(report)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = raw_rejection(response).await;
            tracing::error!("Report registration failed: {}", error);
            return Err(error);
        }

        // The body only confirms the write; an unreadable or unparseable one is logged and ignored
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Report registered but response body could not be read: {}", e);
                return Ok(None);
            }
        };

        match serde_json::from_str::<Value>(&body) {
            Ok(value) => {
                tracing::info!("Report registered: {}", value);
                Ok(Some(value))
            }
            Err(e) => {
                tracing::warn!("Report registered but response is not JSON: {}", e);
                Ok(None)
            }
        }
    }
}
