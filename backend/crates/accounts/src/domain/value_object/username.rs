//! Username Value Object

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Maximum username length in characters
const USERNAME_MAX_LENGTH: usize = 64;

/// Display name for an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    /// Create a new username with validation
    pub fn new(username: impl Into<String>) -> AppResult<Self> {
        let username = username.into().trim().to_string();

        if username.is_empty() {
            return Err(AppError::bad_request("Username cannot be empty"));
        }

        if username.chars().count() > USERNAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at most {} characters",
                USERNAME_MAX_LENGTH
            )));
        }

        if username.chars().any(|c| c.is_control()) {
            return Err(AppError::bad_request(
                "Username contains invalid characters",
            ));
        }

        Ok(Self(username))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(username: impl Into<String>) -> Self {
        Self(username.into())
    }

    /// Get the username as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
