// =============================================================================
// CATALOG SERVICE
// =============================================================================

/// Full list of reports
pub const CATALOG_LIST_PATH: &str = "/api/trash";

/// Create a report from an uploaded image and coordinates
pub const CATALOG_CREATE_PATH: &str = "/api/addTrash";

/// Register a push notification token
pub const NOTIFICATION_REGISTER_PATH: &str = "/api/addNotification";

// =============================================================================
// IMAGE STORE
// =============================================================================

pub const IMAGE_UPLOAD_PATH: &str = "/uploadImage";

/// Multipart field carrying the photo
pub const IMAGE_FIELD_NAME: &str = "image";

/// Filename sent with every upload, whatever the source file was called
pub const IMAGE_FILE_NAME: &str = "photo.jpg";

/// Photos always travel as JPEG
pub const IMAGE_CONTENT_TYPE: &str = "image/jpeg";

// =============================================================================
// MAPS
// =============================================================================

pub const MAP_PLACE_BASE_URL: &str = "https://www.google.com/maps/place";
