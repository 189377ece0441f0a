mod feed_service;

pub use feed_service::{LinkOpener, ReportFeedService};
