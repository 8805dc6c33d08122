//! Accounts Error Types
//!
//! Account-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
#[derive(Debug, Error)]
pub enum AccountError {
    /// A required request field is absent or empty
    #[error("Missing required fields")]
    MissingFields,

    /// A field failed validation (bad email format, weak password, ...)
    #[error("{0}")]
    Validation(String),

    /// Wrong email or password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// No session, or the session token failed verification
    #[error("User not logged in")]
    NotLoggedIn,

    /// The session's user no longer exists
    #[error("User not found")]
    UserNotFound,

    /// An account with this email already exists
    #[error("An error occurred during registration")]
    EmailTaken,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::MissingFields | AccountError::Validation(_) => ErrorKind::BadRequest,
            AccountError::InvalidCredentials | AccountError::NotLoggedIn => ErrorKind::Unauthorized,
            AccountError::UserNotFound => ErrorKind::NotFound,
            // The original service reported duplicate registration as a
            // generic registration failure, not a conflict.
            AccountError::EmailTaken => ErrorKind::InternalServerError,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError, hiding internals behind a generic message
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::new(self.kind(), "An error occurred")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::EmailTaken => {
                tracing::warn!("Registration attempt with duplicate email");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AccountError {
    fn from(err: AppError) -> Self {
        AccountError::Internal(err.to_string())
    }
}
