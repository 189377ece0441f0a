use std::sync::Arc;

use crate::core::error::Result;
use crate::features::reports::clients::Catalog;
use crate::features::reports::models::{Report, ReportList};

/// Hands a URL to whatever can show it (browser, maps app, terminal)
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Keeps the client list in step with the catalog
pub struct ReportFeedService {
    catalog: Arc<dyn Catalog>,
}

impl ReportFeedService {
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Fetch the full catalog and replace `reports` with it.
    ///
    /// On failure the list is left untouched.
    pub async fn load(&self, reports: &mut ReportList) -> Result<usize> {
        let entries = self.catalog.list_reports().await?;
        let fetched: Vec<Report> = entries.into_iter().map(Report::from).collect();
        let count = fetched.len();

        reports.replace_all(fetched);
        tracing::info!("Loaded {} reports from catalog", count);

        Ok(count)
    }

    /// Open directions to a report's location
    pub fn open_on_map(&self, report: &Report, opener: &dyn LinkOpener) -> Result<()> {
        let url = report.map_url();
        tracing::debug!("Opening map for {}: {}", report.image_ref, url);
        opener.open(&url)
    }
}
