use super::ReportList;
use crate::features::capture::PreviewState;

/// State owned by the screen that lists reports and submits new ones.
///
/// The catalog fetch writes `reports` through [`ReportFeedService::load`],
/// a submission attempt writes both fields through the pipeline.
///
/// [`ReportFeedService::load`]: crate::features::reports::ReportFeedService::load
#[derive(Debug, Default)]
pub struct ReportBoard {
    pub reports: ReportList,
    pub preview: PreviewState,
}

impl ReportBoard {
    pub fn new() -> Self {
        Self::default()
    }
}
