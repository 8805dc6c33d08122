//! Resolve Session Use Case
//!
//! Maps an inbound session token to the bound user identity. This is a
//! read-only lookup: it must not extend, rotate, or invalidate the session.
//! Expired rows are left in place for the startup sweep.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session_token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// Resolve session use case
pub struct ResolveSessionUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> ResolveSessionUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    /// Resolve a token to a user id, failing closed on anything invalid
    pub async fn resolve(&self, token: &str) -> AccountResult<UserId> {
        let session_id = parse_session_token(&self.config.session_secret, token)
            .ok_or(AccountError::NotLoggedIn)?;

        let session = self
            .session_repo
            .find_by_id(session_id)
            .await?
            .ok_or(AccountError::NotLoggedIn)?;

        if session.is_expired() {
            return Err(AccountError::NotLoggedIn);
        }

        Ok(session.user_id)
    }
}
