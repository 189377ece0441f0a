mod notification_client;

pub use notification_client::{HttpNotificationClient, NotificationRegistry};
