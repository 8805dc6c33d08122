//! Tutor Error Types

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Tutor-specific result type alias
pub type TutorResult<T> = Result<T, TutorError>;

/// Tutor-specific error variants
///
/// Everything here is terminal for the request; no retries are performed.
#[derive(Debug, Error)]
pub enum TutorError {
    /// Solver/validation engine failure (transport or bad payload)
    #[error("An error occurred while processing the input")]
    Solver(String),

    /// Recognition API answered with a non-200 status
    #[error("Failed to process drawing")]
    Upstream { status: u16 },

    /// Recognition API unreachable or its body unreadable
    #[error("{0}")]
    Transport(String),

    /// Database error (submission log)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl TutorError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        // Upstream failures are surfaced as our own 500
        ErrorKind::InternalServerError
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            TutorError::Solver(detail) => {
                tracing::error!(detail = %detail, "Solver engine failure");
            }
            TutorError::Upstream { status } => {
                tracing::error!(status = status, "Recognition API returned an error status");
            }
            TutorError::Transport(detail) => {
                tracing::error!(detail = %detail, "Recognition API transport failure");
            }
            TutorError::Database(e) => {
                tracing::error!(error = %e, "Tutor database error");
            }
        }
    }
}

impl IntoResponse for TutorError {
    fn into_response(self) -> Response {
        self.log();

        // The upstream status is forwarded in the body, as the original
        // recognition proxy did
        if let TutorError::Upstream { status } = &self {
            let body = serde_json::json!({
                "error": "Failed to process drawing",
                "status_code": status,
            });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
        }

        self.to_app_error().into_response()
    }
}
