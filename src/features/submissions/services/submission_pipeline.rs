use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::features::capture::{CaptureCoordinator, CaptureResult};
use crate::features::reports::dtos::CreateTrashDto;
use crate::features::reports::{Catalog, Report, ReportBoard, ReportList};
use crate::features::submissions::models::{AttemptPhase, PhaseCell};
use crate::features::submissions::SubmissionError;
use crate::modules::storage::ImageStore;

/// Uploads a captured photo, registers the report, then prepends it locally.
///
/// Each phase makes at most one request and nothing is retried. A failed
/// registration leaves the already uploaded image orphaned on the image
/// store; it is not rolled back.
pub struct SubmissionPipeline {
    image_store: Arc<dyn ImageStore>,
    catalog: Arc<dyn Catalog>,
    in_flight: AtomicBool,
    phase: PhaseCell,
}

/// Held for the whole of one attempt
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl SubmissionPipeline {
    pub fn new(image_store: Arc<dyn ImageStore>, catalog: Arc<dyn Catalog>) -> Self {
        Self {
            image_store,
            catalog,
            in_flight: AtomicBool::new(false),
            phase: PhaseCell::default(),
        }
    }

    /// Phase of the current attempt, or the outcome of the last one
    pub fn phase(&self) -> AttemptPhase {
        self.phase.get()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Full attempt: capture through the coordinator, then submit.
    ///
    /// Rejected with `AttemptInFlight` before touching the device when
    /// another attempt is still running on this pipeline.
    pub async fn run_attempt(
        &self,
        coordinator: &CaptureCoordinator,
        board: &mut ReportBoard,
    ) -> Result<Report, SubmissionError> {
        let Some(_guard) = InFlightGuard::try_acquire(&self.in_flight) else {
            warn!("Submission attempt rejected: another attempt is in flight");
            return Err(SubmissionError::AttemptInFlight);
        };

        let attempt_id = Uuid::now_v7();
        let span = info_span!("submission", %attempt_id);

        async move {
            self.phase.set(AttemptPhase::Capturing);

            let capture = match coordinator.acquire(&mut board.preview).await {
                Ok(capture) => capture,
                Err(e) => {
                    board.preview.clear();
                    self.phase.set(AttemptPhase::Failed);
                    return Err(e);
                }
            };

            self.submit_guarded(capture, board).await
        }
        .instrument(span)
        .await
    }

    /// Submit an already captured photo.
    ///
    /// The preview is cleared on every outcome. When another attempt is in
    /// flight the capture is dropped and `board` is left untouched.
    pub async fn submit(
        &self,
        capture: CaptureResult,
        board: &mut ReportBoard,
    ) -> Result<Report, SubmissionError> {
        let Some(_guard) = InFlightGuard::try_acquire(&self.in_flight) else {
            warn!("Submission rejected: another attempt is in flight");
            return Err(SubmissionError::AttemptInFlight);
        };

        let attempt_id = Uuid::now_v7();
        self.submit_guarded(capture, board)
            .instrument(info_span!("submission", %attempt_id))
            .await
    }

    async fn submit_guarded(
        &self,
        capture: CaptureResult,
        board: &mut ReportBoard,
    ) -> Result<Report, SubmissionError> {
        let result = self.upload_and_register(capture, &mut board.reports).await;
        board.preview.clear();

        match &result {
            Ok(report) => {
                self.phase.set(AttemptPhase::Succeeded);
                info!("Submission succeeded: {}", report.image_ref);
            }
            Err(e) => {
                self.phase.set(AttemptPhase::Failed);
                warn!("Submission failed: {}", e);
            }
        }

        result
    }

    async fn upload_and_register(
        &self,
        capture: CaptureResult,
        reports: &mut ReportList,
    ) -> Result<Report, SubmissionError> {
        let CaptureResult {
            photo,
            coordinates,
            captured_at,
        } = capture;

        info!(
            "Uploading photo {} captured at {}",
            photo.uri,
            captured_at.to_rfc3339()
        );
        self.phase.set(AttemptPhase::Uploading);

        // The photo handle is consumed here whatever the upload outcome
        let image_ref = self
            .image_store
            .upload_image(photo.into_jpeg())
            .await
            .map_err(SubmissionError::from_upload)?;

        self.phase.set(AttemptPhase::Registering);

        let payload = CreateTrashDto::new(&coordinates, &image_ref);
        let confirmation = self.catalog.add_report(&payload).await.map_err(|e| {
            warn!("Uploaded image {} is not registered: {}", image_ref, e);
            SubmissionError::from_registration(e)
        })?;

        if let Some(body) = confirmation {
            debug!("Catalog confirmation: {}", body);
        }

        // Built from what the client already knows, never from the catalog response
        let report = Report::new(image_ref, coordinates);
        reports.prepend(report.clone());

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::capture::{CapturedPhoto, Permission};
    use crate::features::device::{FixedLocation, StaticPermissions};
    use crate::shared::test_helpers::{sample_capture, FakeCamera, FakeCatalog, FakeImageStore};
    use crate::shared::types::Coordinates;
    use serde_json::json;
    use tokio::sync::Notify;

    fn board_with_preview() -> ReportBoard {
        let mut board = ReportBoard::new();
        board.reports.replace_all(vec![Report::new(
            "https://x/a.jpg",
            Coordinates::new(44.47, -73.21),
        )]);
        board.preview.show("file:///tmp/photo.jpg");
        board
    }

    #[tokio::test]
    async fn test_success_prepends_report_with_uploaded_image_ref() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        // The catalog answers with a different URL; it must be ignored
        let catalog = Arc::new(FakeCatalog::accepting(json!({ "imgURL": "https://other/z.jpg" })));
        let pipeline = SubmissionPipeline::new(store.clone(), catalog.clone());
        let mut board = board_with_preview();

        let report = pipeline
            .submit(sample_capture(44.4759, -73.2121), &mut board)
            .await
            .unwrap();

        assert_eq!(report.image_ref, "https://x/b.jpg");
        assert_eq!(board.reports.len(), 2);
        assert_eq!(board.reports.first(), Some(&report));
        assert!(!board.preview.is_visible());
        assert_eq!(pipeline.phase(), AttemptPhase::Succeeded);
        assert_eq!(store.uploads(), vec![vec![0xFF, 0xD8, 0xFF, 0xD9]]);
    }

    #[tokio::test]
    async fn test_registration_payload_uses_string_coordinates() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store, catalog.clone());
        let mut board = ReportBoard::new();

        pipeline
            .submit(sample_capture(44.4759, -73.2121), &mut board)
            .await
            .unwrap();

        let added = catalog.added();
        assert_eq!(added.len(), 1);
        assert_eq!(
            serde_json::to_value(&added[0]).unwrap(),
            json!({ "lat": "44.4759", "long": "-73.2121", "imgURL": "https://x/b.jpg" })
        );
    }

    #[tokio::test]
    async fn test_upload_rejection_skips_registration() {
        let store = Arc::new(FakeImageStore::rejecting(413, "too large"));
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store, catalog.clone());
        let mut board = board_with_preview();
        let before = board.reports.clone();

        let err = pipeline
            .submit(sample_capture(44.4759, -73.2121), &mut board)
            .await
            .unwrap_err();

        assert_eq!(err, SubmissionError::Upload("too large".to_string()));
        assert_eq!(catalog.add_calls(), 0);
        assert_eq!(board.reports, before);
        assert!(!board.preview.is_visible());
        assert_eq!(pipeline.phase(), AttemptPhase::Failed);
    }

    #[tokio::test]
    async fn test_upload_without_reference_is_an_upload_error() {
        let store = Arc::new(FakeImageStore::malformed());
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store, catalog.clone());
        let mut board = ReportBoard::new();

        let err = pipeline
            .submit(sample_capture(1.0, 2.0), &mut board)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Upload(_)));
        assert_eq!(catalog.add_calls(), 0);
    }

    #[tokio::test]
    async fn test_registration_failure_leaves_list_unchanged() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        let catalog = Arc::new(FakeCatalog::rejecting(500, "could not save trash"));
        let pipeline = SubmissionPipeline::new(store.clone(), catalog);
        let mut board = board_with_preview();
        let before = board.reports.clone();

        let err = pipeline
            .submit(sample_capture(44.4759, -73.2121), &mut board)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmissionError::Registration("could not save trash".to_string())
        );
        // The image was uploaded and stays orphaned
        assert_eq!(store.calls(), 1);
        assert_eq!(board.reports, before);
        assert!(!board.preview.is_visible());
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        let catalog = Arc::new(FakeCatalog::unreachable());
        let pipeline = SubmissionPipeline::new(store, catalog);
        let mut board = ReportBoard::new();

        let err = pipeline
            .submit(sample_capture(1.0, 2.0), &mut board)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Network(_)));
        assert!(err.user_message().is_some());
        assert!(board.reports.is_empty());
    }

    #[tokio::test]
    async fn test_upload_transport_failure_is_network_error() {
        let store = Arc::new(FakeImageStore::unreachable());
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store.clone(), catalog.clone());
        let mut board = board_with_preview();
        let before = board.reports.clone();

        let err = pipeline
            .submit(sample_capture(44.4759, -73.2121), &mut board)
            .await
            .unwrap_err();

        assert!(matches!(err, SubmissionError::Network(_)));
        assert_eq!(store.calls(), 1);
        assert_eq!(catalog.add_calls(), 0);
        assert_eq!(board.reports, before);
        assert!(!board.preview.is_visible());
        assert_eq!(pipeline.phase(), AttemptPhase::Failed);
    }

    #[tokio::test]
    async fn test_denied_permission_makes_no_network_calls() {
        for denied in Permission::CAPTURE {
            let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
            let catalog = Arc::new(FakeCatalog::default());
            let pipeline = SubmissionPipeline::new(store.clone(), catalog.clone());
            let coordinator = CaptureCoordinator::new(
                Arc::new(StaticPermissions::denying([denied])),
                Arc::new(FakeCamera::taking(CapturedPhoto::new("file:///tmp/a.jpg", vec![1]))),
                Arc::new(FixedLocation::new(Coordinates::new(44.4759, -73.2121))),
            );
            let mut board = ReportBoard::new();

            let err = pipeline.run_attempt(&coordinator, &mut board).await.unwrap_err();

            assert_eq!(err, SubmissionError::PermissionDenied(denied));
            assert_eq!(store.calls(), 0);
            assert_eq!(catalog.add_calls(), 0);
            assert!(board.reports.is_empty());
            assert_eq!(pipeline.phase(), AttemptPhase::Failed);
        }
    }

    #[tokio::test]
    async fn test_run_attempt_captures_then_submits() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store, catalog);
        let coordinator = CaptureCoordinator::new(
            Arc::new(StaticPermissions::granting_all()),
            Arc::new(FakeCamera::taking(CapturedPhoto::new("file:///tmp/a.jpg", vec![1, 2]))),
            Arc::new(FixedLocation::new(Coordinates::new(44.4759, -73.2121))),
        );
        let mut board = ReportBoard::new();

        let report = pipeline.run_attempt(&coordinator, &mut board).await.unwrap();

        assert_eq!(board.reports.first(), Some(&report));
        assert_eq!(report.coordinates(), Coordinates::new(44.4759, -73.2121));
        assert!(!board.preview.is_visible());
        assert!(!pipeline.is_busy());
    }

    #[tokio::test]
    async fn test_concurrent_attempt_is_rejected() {
        let gate = Arc::new(Notify::new());
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg").gated(Arc::clone(&gate)));
        let catalog = Arc::new(FakeCatalog::default());
        let pipeline = SubmissionPipeline::new(store.clone(), catalog.clone());
        let mut first_board = ReportBoard::new();
        let mut second_board = board_with_preview();

        let (first, second) = tokio::join!(
            pipeline.submit(sample_capture(1.0, 2.0), &mut first_board),
            async {
                let result = pipeline
                    .submit(sample_capture(3.0, 4.0), &mut second_board)
                    .await;
                gate.notify_one();
                result
            }
        );

        assert!(first.is_ok());
        assert_eq!(second.unwrap_err(), SubmissionError::AttemptInFlight);
        assert_eq!(store.calls(), 1);
        assert_eq!(catalog.add_calls(), 1);
        assert_eq!(first_board.reports.len(), 1);
        // The rejected attempt does not touch its board
        assert_eq!(second_board.reports.len(), 1);
        assert!(second_board.preview.is_visible());
        assert!(!pipeline.is_busy());
    }

    #[tokio::test]
    async fn test_pipeline_is_reusable_after_failure() {
        let store = Arc::new(FakeImageStore::accepting("https://x/b.jpg"));
        let failing = SubmissionPipeline::new(
            Arc::new(FakeImageStore::rejecting(500, "disk full")),
            Arc::new(FakeCatalog::default()),
        );
        let mut board = ReportBoard::new();
        assert!(failing.submit(sample_capture(1.0, 2.0), &mut board).await.is_err());
        assert!(!failing.is_busy());

        let pipeline = SubmissionPipeline::new(store, Arc::new(FakeCatalog::default()));
        pipeline.submit(sample_capture(1.0, 2.0), &mut board).await.unwrap();
        pipeline.submit(sample_capture(3.0, 4.0), &mut board).await.unwrap();

        assert_eq!(board.reports.len(), 2);
        assert_eq!(board.reports.first().unwrap().latitude, 3.0);
    }
}
