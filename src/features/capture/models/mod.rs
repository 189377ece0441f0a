mod capture_result;
mod permission;
mod preview;

pub use capture_result::{CaptureResult, CapturedPhoto};
pub use permission::{Permission, PermissionStatus};
pub use preview::PreviewState;
