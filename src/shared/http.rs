use serde::Deserialize;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};

/// Error body returned by the image store on failure
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Build the HTTP client shared by every service client.
///
/// No timeout is configured; transport defaults apply.
pub fn build_http_client(config: &ApiConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Turn a non-success response into `AppError::Rejected`.
///
/// Prefers the `error` field of a JSON body, then the raw text, then the status line.
pub async fn rejection(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    AppError::Rejected {
        status: status.as_u16(),
        message: rejection_message(status, &body),
    }
}

/// Same as [`rejection`], but keeps the raw body text untouched
pub async fn raw_rejection(response: reqwest::Response) -> AppError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body
    };

    AppError::Rejected {
        status: status.as_u16(),
        message,
    }
}

fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    if let Ok(ErrorBody { error: Some(error) }) = serde_json::from_str::<ErrorBody>(body) {
        if !error.is_empty() {
            return error;
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.to_string()
    }
}
