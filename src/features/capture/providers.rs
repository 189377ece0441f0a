//! Device capabilities the capture flow depends on

use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::capture::models::{CapturedPhoto, Permission, PermissionStatus};
use crate::shared::types::Coordinates;

/// Shows the OS permission prompt (or answers from a policy)
#[async_trait]
pub trait PermissionProvider: Send + Sync {
    async fn request(&self, permission: Permission) -> PermissionStatus;
}

#[async_trait]
pub trait Camera: Send + Sync {
    /// Launch the capture UI. `Ok(None)` means the user cancelled.
    async fn capture(&self) -> Result<Option<CapturedPhoto>>;
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Single-shot read of the current position
    async fn current_position(&self) -> Result<Coordinates>;
}
