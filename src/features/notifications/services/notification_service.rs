use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::capture::{Permission, PermissionProvider};
use crate::features::notifications::clients::NotificationRegistry;

/// Source of this device's push token
#[async_trait]
pub trait PushTokenProvider: Send + Sync {
    async fn device_token(&self) -> Result<String>;
}

/// Registers the device for push notifications
pub struct NotificationService {
    permissions: Arc<dyn PermissionProvider>,
    tokens: Arc<dyn PushTokenProvider>,
    registry: Arc<dyn NotificationRegistry>,
}

impl NotificationService {
    pub fn new(
        permissions: Arc<dyn PermissionProvider>,
        tokens: Arc<dyn PushTokenProvider>,
        registry: Arc<dyn NotificationRegistry>,
    ) -> Self {
        Self {
            permissions,
            tokens,
            registry,
        }
    }

    /// Ask for permission, read the token and send it to the catalog.
    ///
    /// Returns the registered token, or `None` when permission was denied.
    pub async fn register(&self) -> Result<Option<String>> {
        let status = self.permissions.request(Permission::Notifications).await;
        if !status.is_granted() {
            tracing::info!("Push registration skipped: notifications permission denied");
            return Ok(None);
        }

        let token = self.tokens.device_token().await?;
        self.registry.register_token(&token).await?;

        tracing::info!("Push token registered");
        Ok(Some(token))
    }
}
