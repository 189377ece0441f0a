use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::features::capture::{Permission, PermissionProvider, PermissionStatus};

/// Answers permission prompts from a fixed deny list
#[derive(Debug, Default)]
pub struct StaticPermissions {
    denied: HashSet<Permission>,
    requested: Mutex<Vec<Permission>>,
}

impl StaticPermissions {
    pub fn granting_all() -> Self {
        Self::default()
    }

    pub fn denying(denied: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            denied: denied.into_iter().collect(),
            requested: Mutex::new(Vec::new()),
        }
    }

    /// Every prompt shown so far, in order
    pub fn requested(&self) -> Vec<Permission> {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl PermissionProvider for StaticPermissions {
    async fn request(&self, permission: Permission) -> PermissionStatus {
        self.requested
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(permission);

        if self.denied.contains(&permission) {
            PermissionStatus::Denied
        } else {
            PermissionStatus::Granted
        }
    }
}
