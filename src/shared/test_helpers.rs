//! In-memory collaborators and an HTTP harness for unit tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::Notify;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::capture::{Camera, CaptureResult, CapturedPhoto, LocationProvider};
use crate::features::reports::dtos::{CreateTrashDto, TrashEntryDto};
use crate::features::reports::{Catalog, LinkOpener};
use crate::modules::storage::ImageStore;
use crate::shared::types::Coordinates;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_test_server(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn test_api_config(base_url: &str) -> ApiConfig {
    ApiConfig::new(base_url, base_url, "racooni-tests").unwrap()
}

pub fn sample_capture(latitude: f64, longitude: f64) -> CaptureResult {
    CaptureResult::new(
        CapturedPhoto::new("file:///tmp/photo.jpg", vec![0xFF, 0xD8, 0xFF, 0xD9]),
        Coordinates::new(latitude, longitude),
    )
}

// =============================================================================
// IMAGE STORE
// =============================================================================

pub enum UploadOutcome {
    Accept(String),
    Reject(u16, String),
    Malformed,
    Unreachable,
}

pub struct FakeImageStore {
    outcome: UploadOutcome,
    calls: AtomicUsize,
    uploads: Mutex<Vec<Vec<u8>>>,
    gate: Option<Arc<Notify>>,
}

impl FakeImageStore {
    fn with_outcome(outcome: UploadOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            uploads: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    pub fn accepting(image_url: &str) -> Self {
        Self::with_outcome(UploadOutcome::Accept(image_url.to_string()))
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self::with_outcome(UploadOutcome::Reject(status, message.to_string()))
    }

    pub fn malformed() -> Self {
        Self::with_outcome(UploadOutcome::Malformed)
    }

    pub fn unreachable() -> Self {
        Self::with_outcome(UploadOutcome::Unreachable)
    }

    /// Hold every upload until `gate` is notified
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn uploads(&self) -> Vec<Vec<u8>> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStore for FakeImageStore {
    async fn upload_image(&self, jpeg: Vec<u8>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.uploads.lock().unwrap().push(jpeg);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match &self.outcome {
            UploadOutcome::Accept(url) => Ok(url.clone()),
            UploadOutcome::Reject(status, message) => Err(AppError::Rejected {
                status: *status,
                message: message.clone(),
            }),
            UploadOutcome::Malformed => Err(AppError::InvalidResponse(
                "Upload response has no ImageURL".to_string(),
            )),
            UploadOutcome::Unreachable => {
                Err(AppError::Network("connection refused".to_string()))
            }
        }
    }
}

// =============================================================================
// CATALOG
// =============================================================================

pub enum RegisterOutcome {
    Accept(Value),
    Reject(u16, String),
    Unreachable,
}

pub struct FakeCatalog {
    listing: Option<Value>,
    add_outcome: RegisterOutcome,
    added: Mutex<Vec<CreateTrashDto>>,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            listing: Some(json!([])),
            add_outcome: RegisterOutcome::Accept(json!({ "status": "created" })),
            added: Mutex::new(Vec::new()),
        }
    }
}

impl FakeCatalog {
    pub fn with_listing(listing: Value) -> Self {
        Self {
            listing: Some(listing),
            ..Self::default()
        }
    }

    pub fn accepting(body: Value) -> Self {
        Self {
            add_outcome: RegisterOutcome::Accept(body),
            ..Self::default()
        }
    }

    pub fn rejecting(status: u16, text: &str) -> Self {
        Self {
            add_outcome: RegisterOutcome::Reject(status, text.to_string()),
            ..Self::default()
        }
    }

    pub fn unreachable() -> Self {
        Self {
            listing: None,
            add_outcome: RegisterOutcome::Unreachable,
            added: Mutex::new(Vec::new()),
        }
    }

    pub fn added(&self) -> Vec<CreateTrashDto> {
        self.added.lock().unwrap().clone()
    }

    pub fn add_calls(&self) -> usize {
        self.added.lock().unwrap().len()
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn list_reports(&self) -> Result<Vec<TrashEntryDto>> {
        match &self.listing {
            Some(listing) => serde_json::from_value(listing.clone())
                .map_err(|e| AppError::InvalidResponse(e.to_string())),
            None => Err(AppError::Network("connection refused".to_string())),
        }
    }

    async fn add_report(&self, report: &CreateTrashDto) -> Result<Option<Value>> {
        self.added.lock().unwrap().push(report.clone());

        match &self.add_outcome {
            RegisterOutcome::Accept(body) => Ok(Some(body.clone())),
            RegisterOutcome::Reject(status, text) => Err(AppError::Rejected {
                status: *status,
                message: text.clone(),
            }),
            RegisterOutcome::Unreachable => {
                Err(AppError::Network("connection refused".to_string()))
            }
        }
    }
}

// =============================================================================
// DEVICE
// =============================================================================

pub struct FakeCamera {
    photo: Mutex<Option<CapturedPhoto>>,
    launches: Arc<AtomicUsize>,
}

impl FakeCamera {
    pub fn taking(photo: CapturedPhoto) -> Self {
        Self {
            photo: Mutex::new(Some(photo)),
            launches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            photo: Mutex::new(None),
            launches: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn launches(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.launches)
    }
}

#[async_trait]
impl Camera for FakeCamera {
    async fn capture(&self) -> Result<Option<CapturedPhoto>> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(self.photo.lock().unwrap().take())
    }
}

pub struct FailingLocation;

#[async_trait]
impl LocationProvider for FailingLocation {
    async fn current_position(&self) -> Result<Coordinates> {
        Err(AppError::Internal("location services are off".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingLinkOpener {
    opened: Mutex<Vec<String>>,
}

impl RecordingLinkOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().unwrap().clone()
    }
}

impl LinkOpener for RecordingLinkOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.lock().unwrap().push(url.to_string());
        Ok(())
    }
}
