//! Login Use Case
//!
//! Verifies credentials and establishes exactly one session for the user.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AccountConfig;
use crate::application::require_field;
use crate::application::session_token::sign_session_token;
use crate::domain::entity::session::Session;
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::email::Email;
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// Login input
pub struct LoginInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login output
pub struct LoginOutput {
    pub user_id: UserId,
    /// Signed token for the session cookie
    pub session_token: String,
}

/// Login use case
pub struct LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AccountConfig>,
}

impl<U, S> LoginUseCase<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AccountConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountResult<LoginOutput> {
        let email = require_field(input.email)?;
        let password = require_field(input.password)?;

        // Malformed identifiers are indistinguishable from wrong ones
        let email = Email::new(email).map_err(|_| AccountError::InvalidCredentials)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(password).map_err(|_| AccountError::InvalidCredentials)?;

        if !user.password_hash.verify(&password) {
            return Err(AccountError::InvalidCredentials);
        }

        // Exactly one bound session per user: replace whatever exists
        self.session_repo.delete_all_for_user(&user.user_id).await?;

        let session = Session::new(user.user_id, self.config.session_ttl);
        self.session_repo.create(&session).await?;

        let session_token = sign_session_token(&self.config.session_secret, session.session_id);

        tracing::info!(
            user_id = %user.user_id,
            session_id = %session.session_id,
            "User logged in"
        );

        Ok(LoginOutput {
            user_id: user.user_id,
            session_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::application::session_token::parse_session_token;
    use crate::infra::memory::InMemoryAccountRepository;

    async fn register(repo: &Arc<InMemoryAccountRepository>) {
        RegisterUseCase::new(repo.clone())
            .execute(RegisterInput {
                username: Some("alice".to_string()),
                email: Some("alice@example.com".to_string()),
                password: Some("correct horse battery".to_string()),
            })
            .await
            .unwrap();
    }

    fn login_input(email: &str, password: &str) -> LoginInput {
        LoginInput {
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_login_success_creates_session() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        register(&repo).await;

        let config = Arc::new(AccountConfig::development());
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config.clone());

        let output = use_case
            .execute(login_input("alice@example.com", "correct horse battery"))
            .await
            .unwrap();

        let session_id =
            parse_session_token(&config.session_secret, &output.session_token).unwrap();
        let session = repo.find_session_sync(session_id).unwrap();
        assert_eq!(session.user_id, output.user_id);
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        register(&repo).await;

        let config = Arc::new(AccountConfig::development());
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let result = use_case
            .execute(login_input("alice@example.com", "wrong password!"))
            .await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
        assert_eq!(repo.session_count(), 0);
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        register(&repo).await;

        let config = Arc::new(AccountConfig::development());
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let result = use_case
            .execute(login_input("bob@example.com", "correct horse battery"))
            .await;
        assert!(matches!(result, Err(AccountError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_missing_fields() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let config = Arc::new(AccountConfig::development());
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        let result = use_case
            .execute(LoginInput {
                email: Some("alice@example.com".to_string()),
                password: None,
            })
            .await;
        assert!(matches!(result, Err(AccountError::MissingFields)));
    }

    #[tokio::test]
    async fn test_second_login_replaces_session() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        register(&repo).await;

        let config = Arc::new(AccountConfig::development());
        let use_case = LoginUseCase::new(repo.clone(), repo.clone(), config);

        use_case
            .execute(login_input("alice@example.com", "correct horse battery"))
            .await
            .unwrap();
        use_case
            .execute(login_input("alice@example.com", "correct horse battery"))
            .await
            .unwrap();

        assert_eq!(repo.session_count(), 1);
    }
}
