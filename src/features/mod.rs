pub mod capture;
pub mod device;
pub mod notifications;
pub mod reports;
pub mod submissions;
