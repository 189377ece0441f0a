//! Device providers for running the client outside a phone
//!
//! Photos come from files, the position and permission answers from the
//! command line.

mod file_camera;
mod fixed_location;
mod print_link_opener;
mod static_permissions;
mod static_push_token;

pub use file_camera::FileCamera;
pub use fixed_location::FixedLocation;
pub use print_link_opener::PrintLinkOpener;
pub use static_permissions::StaticPermissions;
pub use static_push_token::StaticPushToken;
