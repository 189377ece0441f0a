use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The request never produced an HTTP response (DNS, connect, TLS, body read)
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-success status
    #[error("Request rejected with HTTP {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The service answered with success but the body was unusable
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Message suitable for showing to the user as-is
    pub fn server_message(&self) -> String {
        match self {
            AppError::Rejected { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        tracing::error!("HTTP transport error: {:?}", e);
        AppError::Network(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
