use chrono::{DateTime, Utc};

use crate::shared::types::Coordinates;

/// A photo handed back by the camera, already JPEG encoded
pub struct CapturedPhoto {
    /// Local reference used for the preview
    pub uri: String,
    jpeg: Vec<u8>,
}

impl CapturedPhoto {
    pub fn new(uri: impl Into<String>, jpeg: Vec<u8>) -> Self {
        Self {
            uri: uri.into(),
            jpeg,
        }
    }

    pub fn len(&self) -> usize {
        self.jpeg.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jpeg.is_empty()
    }

    /// Give up the photo bytes; the handle is gone afterwards
    pub fn into_jpeg(self) -> Vec<u8> {
        self.jpeg
    }
}

impl std::fmt::Debug for CapturedPhoto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapturedPhoto")
            .field("uri", &self.uri)
            .field("bytes", &self.jpeg.len())
            .finish()
    }
}

/// Everything one submission needs, consumed once by the pipeline.
///
/// Only the capture coordinator builds these, and only after every
/// permission was granted and the user actually took a photo.
///
/// ```compile_fail
/// use racooni::features::capture::{CaptureResult, CapturedPhoto};
/// use racooni::shared::types::Coordinates;
///
/// let forged = CaptureResult {
///     photo: CapturedPhoto::new("forged", vec![1]),
///     coordinates: Coordinates::new(500.0, f64::NAN),
///     captured_at: chrono::Utc::now(),
/// };
/// ```
#[derive(Debug)]
pub struct CaptureResult {
    pub(crate) photo: CapturedPhoto,
    pub(crate) coordinates: Coordinates,
    pub(crate) captured_at: DateTime<Utc>,
}

impl CaptureResult {
    pub(crate) fn new(photo: CapturedPhoto, coordinates: Coordinates) -> Self {
        Self {
            photo,
            coordinates,
            captured_at: Utc::now(),
        }
    }

    pub fn photo(&self) -> &CapturedPhoto {
        &self.photo
    }

    /// Validated position read right after the photo was taken
    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }
}
