use super::Report;

/// Client-side copy of the catalog, in arrival order.
///
/// Only two writes exist: a full replace after the catalog fetch and a
/// single prepend after a successful submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportList {
    items: Vec<Report>,
}

impl ReportList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole list with a fresh catalog fetch
    pub fn replace_all(&mut self, reports: Vec<Report>) {
        self.items = reports;
    }

    /// Insert a freshly submitted report at the front (newest first)
    pub fn prepend(&mut self, report: Report) {
        self.items.insert(0, report);
    }

    pub fn get(&self, image_ref: &str) -> Option<&Report> {
        self.items.iter().find(|r| r.image_ref == image_ref)
    }

    pub fn first(&self) -> Option<&Report> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Report] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a ReportList {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
