use serde::{Deserialize, Serialize};

/// Body of `POST /api/addNotification`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterNotificationDto {
    pub token: String,
}
