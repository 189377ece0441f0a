/// Transient "photo being submitted" state shown while an attempt runs.
///
/// Set by the capture coordinator, cleared by the pipeline whatever the
/// outcome, so a finished attempt always leaves a clean screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    photo_uri: Option<String>,
}

impl PreviewState {
    pub fn show(&mut self, photo_uri: impl Into<String>) {
        self.photo_uri = Some(photo_uri.into());
    }

    pub fn clear(&mut self) {
        self.photo_uri = None;
    }

    pub fn photo_uri(&self) -> Option<&str> {
        self.photo_uri.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.photo_uri.is_some()
    }
}
