//! Curriculum Error Types

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Curriculum-specific result type alias
pub type CurriculumResult<T> = Result<T, CurriculumError>;

/// Curriculum-specific error variants
///
/// A module that exists but has no matching part, or whose question list is
/// empty, is reported exactly like a wholly absent module: callers get one
/// failure signal, not two.
#[derive(Debug, Error)]
pub enum CurriculumError {
    /// Module document absent or malformed
    #[error("Module not found")]
    ModuleNotFound,

    /// Module or part missing for a part-slice request
    #[error("Module or part not found")]
    PartNotFound,

    /// Non-not-found read failure
    #[error("An error occurred while loading the module")]
    Storage(#[source] std::io::Error),
}

impl CurriculumError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurriculumError::ModuleNotFound | CurriculumError::PartNotFound => ErrorKind::NotFound,
            CurriculumError::Storage(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    fn log(&self) {
        match self {
            CurriculumError::Storage(e) => {
                tracing::error!(error = %e, "Curriculum storage error");
            }
            _ => {
                tracing::debug!(error = %self, "Curriculum lookup miss");
            }
        }
    }
}

impl IntoResponse for CurriculumError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(CurriculumError::ModuleNotFound.kind().status_code(), 404);
        assert_eq!(CurriculumError::PartNotFound.kind().status_code(), 404);
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(CurriculumError::Storage(io).kind().status_code(), 500);
    }
}
