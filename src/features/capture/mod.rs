pub mod models;
pub mod providers;
pub mod services;

pub use models::{CaptureResult, CapturedPhoto, Permission, PermissionStatus, PreviewState};
pub use providers::{Camera, LocationProvider, PermissionProvider};
pub use services::CaptureCoordinator;
