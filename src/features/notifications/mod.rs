pub mod clients;
pub mod dtos;
pub mod services;

pub use clients::{HttpNotificationClient, NotificationRegistry};
pub use services::{NotificationService, PushTokenProvider};
