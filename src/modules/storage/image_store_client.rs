//! Image store client
//!
//! Uploads report photos as a single multipart request and returns the
//! server-assigned image URL.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::shared::constants::{
    IMAGE_CONTENT_TYPE, IMAGE_FIELD_NAME, IMAGE_FILE_NAME, IMAGE_UPLOAD_PATH,
};
use crate::shared::http::{build_http_client, rejection};

/// Successful upload response body
#[derive(Debug, Deserialize)]
struct UploadImageResponse {
    #[serde(rename = "ImageURL")]
    image_url: Option<String>,
}

/// Remote store for report photos
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Upload JPEG bytes and return the server-assigned image reference.
    ///
    /// Non-success statuses come back as `AppError::Rejected` carrying the
    /// server message; a success body without `ImageURL` is
    /// `AppError::InvalidResponse`.
    async fn upload_image(&self, jpeg: Vec<u8>) -> Result<String>;
}

/// reqwest-backed [`ImageStore`]
pub struct HttpImageStore {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpImageStore {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
            upload_url: config.image_store_endpoint(IMAGE_UPLOAD_PATH),
        })
    }
}

#[async_trait]
impl ImageStore for HttpImageStore {
    async fn upload_image(&self, jpeg: Vec<u8>) -> Result<String> {
        let size = jpeg.len();
        let part = Part::bytes(jpeg)
            .file_name(IMAGE_FILE_NAME)
            .mime_str(IMAGE_CONTENT_TYPE)
            .map_err(|e| AppError::Internal(format!("Invalid upload content type: {}", e)))?;
        let form = Form::new().part(IMAGE_FIELD_NAME, part);

        debug!("Uploading {} bytes to {}", size, self.upload_url);

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = rejection(response).await;
            warn!("Image upload rejected: {}", error);
            return Err(error);
        }

        let body: UploadImageResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse upload response: {:?}", e);
            AppError::InvalidResponse(format!("Failed to parse upload response: {}", e))
        })?;

        let image_url = body
            .image_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                AppError::InvalidResponse("Upload response has no ImageURL".to_string())
            })?;

        info!("Image uploaded: {}", image_url);
        Ok(image_url)
    }
}
