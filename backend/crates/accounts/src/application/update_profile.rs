//! Update Profile Use Case
//!
//! Rewrites username and email for an authenticated user. Both fields are
//! required; the write targets the row directly without a prior read.

use std::sync::Arc;

use crate::application::require_field;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// Update profile input
pub struct UpdateProfileInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Update profile use case
pub struct UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> UpdateProfileUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: UpdateProfileInput) -> AccountResult<()> {
        let username = require_field(input.username)?;
        let email = require_field(input.email)?;

        let username = Username::new(username)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;
        let email =
            Email::new(email).map_err(|e| AccountError::Validation(e.message().to_string()))?;

        self.user_repo
            .update_profile(user_id, &username, &email)
            .await?;

        tracing::info!(user_id = %user_id, "User profile updated");

        Ok(())
    }
}
