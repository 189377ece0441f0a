use std::sync::Arc;

use tracing::{debug, info, warn};
use validator::Validate;

use crate::features::capture::models::{CaptureResult, Permission, PreviewState};
use crate::features::capture::providers::{Camera, LocationProvider, PermissionProvider};
use crate::features::submissions::SubmissionError;

/// Turns an "add report" action into a complete [`CaptureResult`] or an abort.
///
/// Nothing partial ever leaves this type: a denied permission, a cancelled
/// camera or a bad location reading ends the attempt before any network call.
pub struct CaptureCoordinator {
    permissions: Arc<dyn PermissionProvider>,
    camera: Arc<dyn Camera>,
    location: Arc<dyn LocationProvider>,
}

impl CaptureCoordinator {
    pub fn new(
        permissions: Arc<dyn PermissionProvider>,
        camera: Arc<dyn Camera>,
        location: Arc<dyn LocationProvider>,
    ) -> Self {
        Self {
            permissions,
            camera,
            location,
        }
    }

    /// Acquire permissions, a photo and the current position, in that order.
    ///
    /// On success the preview shows the captured photo.
    pub async fn acquire(
        &self,
        preview: &mut PreviewState,
    ) -> Result<CaptureResult, SubmissionError> {
        for permission in Permission::CAPTURE {
            let status = self.permissions.request(permission).await;
            if !status.is_granted() {
                info!("Capture aborted: {} permission denied", permission);
                return Err(SubmissionError::PermissionDenied(permission));
            }
            debug!("{} permission granted", permission);
        }

        let photo = match self.camera.capture().await {
            Ok(Some(photo)) if !photo.is_empty() => photo,
            Ok(Some(_)) => {
                info!("Capture aborted: camera returned an empty image");
                return Err(SubmissionError::CaptureCancelled);
            }
            Ok(None) => {
                info!("Capture aborted: cancelled by user");
                return Err(SubmissionError::CaptureCancelled);
            }
            Err(e) => {
                warn!("Capture aborted: camera failed: {}", e);
                return Err(SubmissionError::CaptureCancelled);
            }
        };

        let coordinates = self.location.current_position().await.map_err(|e| {
            warn!("Capture aborted: location read failed: {}", e);
            SubmissionError::LocationUnavailable(e.to_string())
        })?;

        coordinates.validate().map_err(|e| {
            warn!("Capture aborted: invalid coordinates {:?}: {}", coordinates, e);
            SubmissionError::LocationUnavailable(e.to_string())
        })?;

        info!(
            "Captured photo {} ({} bytes) at {},{}",
            photo.uri,
            photo.len(),
            coordinates.latitude,
            coordinates.longitude
        );

        preview.show(photo.uri.clone());
        Ok(CaptureResult::new(photo, coordinates))
    }
}
