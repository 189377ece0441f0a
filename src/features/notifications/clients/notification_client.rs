use async_trait::async_trait;

use crate::core::config::ApiConfig;
use crate::core::error::Result;
use crate::features::notifications::dtos::RegisterNotificationDto;
use crate::shared::constants::NOTIFICATION_REGISTER_PATH;
use crate::shared::http::{build_http_client, raw_rejection};

/// Server-side list of devices that want push notifications
#[async_trait]
pub trait NotificationRegistry: Send + Sync {
    async fn register_token(&self, token: &str) -> Result<()>;
}

pub struct HttpNotificationClient {
    http_client: reqwest::Client,
    register_url: String,
}

impl HttpNotificationClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(config)?,
            register_url: config.catalog_endpoint(NOTIFICATION_REGISTER_PATH),
        })
    }
}

#[async_trait]
impl NotificationRegistry for HttpNotificationClient {
    async fn register_token(&self, token: &str) -> Result<()> {
        tracing::debug!("Registering push token at {}", self.register_url);

        let response = self
            .http_client
            .post(&self.register_url)
            .json(&RegisterNotificationDto {
                token: token.to_string(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let error = raw_rejection(response).await;
            tracing::error!("Push token registration failed: {}", error);
            return Err(error);
        }

        Ok(())
    }
}
