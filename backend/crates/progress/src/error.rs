//! Progress Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Progress-specific result type alias
pub type ProgressResult<T> = Result<T, ProgressError>;

/// Progress-specific error variants
#[derive(Debug, Error)]
pub enum ProgressError {
    /// user_id, module_id, or progress absent from the report
    #[error("Missing required data")]
    MissingFields,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProgressError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProgressError::MissingFields => ErrorKind::BadRequest,
            ProgressError::Database(_) | ProgressError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            ProgressError::Database(_) | ProgressError::Internal(_) => AppError::new(
                self.kind(),
                "An error occurred while updating progress",
            ),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ProgressError::Database(e) => {
                tracing::error!(error = %e, "Progress database error");
            }
            ProgressError::Internal(msg) => {
                tracing::error!(message = %msg, "Progress internal error");
            }
            ProgressError::MissingFields => {
                tracing::debug!("Progress report with missing fields");
            }
        }
    }
}

impl IntoResponse for ProgressError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
