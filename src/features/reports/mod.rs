pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{Catalog, HttpCatalogClient};
pub use models::{Report, ReportBoard, ReportList};
pub use services::{LinkOpener, ReportFeedService};
