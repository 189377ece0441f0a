//! Storage module for report photos
//!
//! Provides the image store client used by the submission pipeline.

mod image_store_client;

pub use image_store_client::{HttpImageStore, ImageStore};
