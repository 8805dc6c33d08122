//! Logout Use Case
//!
//! Clears the token-to-user binding. Idempotent: logging out an unknown
//! or already-cleared session is not an error.

use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::session_token::parse_session_token;
use crate::domain::repository::SessionRepository;
use crate::error::AccountResult;

/// Logout use case
pub struct LogoutUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<S> LogoutUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self {
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, token: &str) -> AccountResult<()> {
        if let Some(session_id) = parse_session_token(&self.config.session_secret, token) {
            self.session_repo.delete(session_id).await?;
            tracing::info!(session_id = %session_id, "User logged out");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session_token::sign_session_token;
    use crate::domain::entity::session::Session;
    use crate::infra::memory::InMemoryAccountRepository;
    use kernel::id::UserId;

    #[tokio::test]
    async fn test_logout_deletes_session() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = Arc::new(AccountConfig::development());

        let session = Session::new(UserId::new(), config.session_ttl);
        repo.insert_session_sync(session.clone());

        let token = sign_session_token(&config.session_secret, session.session_id);

        LogoutUseCase::new(repo.clone(), config)
            .execute(&token)
            .await
            .unwrap();

        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_logout_with_garbage_token_is_ok() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = Arc::new(AccountConfig::development());

        LogoutUseCase::new(repo.clone(), config)
            .execute("not-a-token")
            .await
            .unwrap();
    }
}
