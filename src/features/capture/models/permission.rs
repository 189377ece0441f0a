use serde::{Deserialize, Serialize};

/// Device permissions the client asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    Camera,
    MediaLibrary,
    Location,
    Notifications,
}

impl Permission {
    /// Permissions a capture attempt needs, in the order they are requested
    pub const CAPTURE: [Permission; 3] = [
        Permission::Camera,
        Permission::MediaLibrary,
        Permission::Location,
    ];
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Permission::Camera => write!(f, "camera"),
            Permission::MediaLibrary => write!(f, "media_library"),
            Permission::Location => write!(f, "location"),
            Permission::Notifications => write!(f, "notifications"),
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "camera" => Ok(Permission::Camera),
            "media_library" | "media" => Ok(Permission::MediaLibrary),
            "location" => Ok(Permission::Location),
            "notifications" => Ok(Permission::Notifications),
            other => Err(format!("unknown permission '{}'", other)),
        }
    }
}

/// Outcome of a permission prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}
