use thiserror::Error;

use crate::core::error::AppError;
use crate::features::capture::Permission;

/// Why a submission attempt ended without a report
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Permission denied: {0}")]
    PermissionDenied(Permission),

    #[error("Capture cancelled")]
    CaptureCancelled,

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),

    /// The image store rejected the photo or returned no reference
    #[error("Upload failed: {0}")]
    Upload(String),

    /// The catalog rejected the report; carries the raw response text
    #[error("Registration failed: {0}")]
    Registration(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Another submission is already in progress")]
    AttemptInFlight,
}

impl SubmissionError {
    /// Map a failure of the upload phase
    pub fn from_upload(error: AppError) -> Self {
        match error {
            AppError::Network(message) => SubmissionError::Network(message),
            other => SubmissionError::Upload(other.server_message()),
        }
    }

    /// Map a failure of the registration phase
    pub fn from_registration(error: AppError) -> Self {
        match error {
            AppError::Network(message) => SubmissionError::Network(message),
            other => SubmissionError::Registration(other.server_message()),
        }
    }

    /// Aborts the user chose (or allowed) are not reported back
    pub fn is_silent(&self) -> bool {
        matches!(
            self,
            SubmissionError::PermissionDenied(_) | SubmissionError::CaptureCancelled
        )
    }

    /// Alert text for the user, `None` for silent aborts
    pub fn user_message(&self) -> Option<String> {
        if self.is_silent() {
            return None;
        }

        match self {
            SubmissionError::PermissionDenied(_) | SubmissionError::CaptureCancelled => None,
            SubmissionError::LocationUnavailable(_) => {
                Some("Could not read your location. Please try again.".to_string())
            }
            SubmissionError::Upload(message) => Some(format!("Upload failed: {}", message)),
            SubmissionError::Registration(message) => {
                Some(format!("Could not save your report: {}", message))
            }
            SubmissionError::Network(_) => {
                Some("Something went wrong. Please check your connection and try again.".to_string())
            }
            SubmissionError::AttemptInFlight => {
                Some("Your previous report is still being submitted.".to_string())
            }
        }
    }
}
