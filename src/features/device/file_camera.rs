use std::io::Cursor;
use std::path::PathBuf;

use async_trait::async_trait;
use image::{DynamicImage, ImageFormat};

use crate::core::error::{AppError, Result};
use crate::features::capture::{Camera, CapturedPhoto};

/// "Takes" a photo by reading an image file.
///
/// Whatever the file format, the photo handed on is JPEG.
pub struct FileCamera {
    path: PathBuf,
}

impl FileCamera {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl Camera for FileCamera {
    async fn capture(&self) -> Result<Option<CapturedPhoto>> {
        let bytes = tokio::fs::read(&self.path).await?;
        if bytes.is_empty() {
            tracing::warn!("Photo file {} is empty", self.path.display());
            return Ok(None);
        }

        // Decoding and encoding are CPU bound
        let jpeg = tokio::task::spawn_blocking(move || ensure_jpeg(bytes))
            .await
            .map_err(|e| AppError::Internal(format!("Image conversion task failed: {}", e)))??;

        let uri = format!("file://{}", self.path.display());
        Ok(Some(CapturedPhoto::new(uri, jpeg)))
    }
}

/// Return `bytes` unchanged when already JPEG, otherwise re-encode them as JPEG
pub fn ensure_jpeg(bytes: Vec<u8>) -> Result<Vec<u8>> {
    let format = image::guess_format(&bytes)
        .map_err(|e| AppError::Image(format!("Unrecognised image format: {}", e)))?;

    if format == ImageFormat::Jpeg {
        return Ok(bytes);
    }

    let img = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| AppError::Image(format!("Failed to decode {:?} image: {}", format, e)))?;

    // JPEG has no alpha channel
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut out = Cursor::new(Vec::new());
    rgb.write_to(&mut out, ImageFormat::Jpeg)
        .map_err(|e| AppError::Image(format!("Failed to encode JPEG: {}", e)))?;

    tracing::debug!(
        "Re-encoded {:?} photo as JPEG ({} bytes)",
        format,
        out.get_ref().len()
    );
    Ok(out.into_inner())
}
