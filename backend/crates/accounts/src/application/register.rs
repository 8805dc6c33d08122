//! Register Use Case
//!
//! Creates a new student account.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::require_field;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// Register input
pub struct RegisterInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: UserId,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountResult<RegisterOutput> {
        let username = require_field(input.username)?;
        let email = require_field(input.email)?;
        let password = require_field(input.password)?;

        let username = Username::new(username)
            .map_err(|e| AccountError::Validation(e.message().to_string()))?;
        let email =
            Email::new(email).map_err(|e| AccountError::Validation(e.message().to_string()))?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AccountError::EmailTaken);
        }

        // Hash the password before storing it
        let password = ClearTextPassword::new(password)
            .map_err(|e| AccountError::Validation(e.to_string()))?;
        let password_hash = password
            .hash()
            .map_err(|e| AccountError::Internal(e.to_string()))?;

        let user = User::new(username, email, password_hash);

        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::InMemoryAccountRepository;

    fn input(username: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        let output = use_case
            .execute(input("alice", "alice@example.com", "correct horse battery"))
            .await
            .unwrap();

        let email = Email::new("alice@example.com").unwrap();
        let stored = repo.find_by_email_sync(&email).unwrap();
        assert_eq!(stored.user_id, output.user_id);
        // Never stored in plaintext
        assert_ne!(
            stored.password_hash.as_phc_string(),
            "correct horse battery"
        );
    }

    #[tokio::test]
    async fn test_register_missing_fields() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        let result = use_case
            .execute(RegisterInput {
                username: Some("alice".to_string()),
                email: None,
                password: Some("correct horse battery".to_string()),
            })
            .await;
        assert!(matches!(result, Err(AccountError::MissingFields)));

        // Empty strings count as missing
        let result = use_case
            .execute(input("", "alice@example.com", "correct horse battery"))
            .await;
        assert!(matches!(result, Err(AccountError::MissingFields)));

        assert_eq!(repo.user_count(), 0);
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case
            .execute(input("alice", "alice@example.com", "correct horse battery"))
            .await
            .unwrap();

        let result = use_case
            .execute(input("mallory", "alice@example.com", "tr0ub4dor and three"))
            .await;
        assert!(matches!(result, Err(AccountError::EmailTaken)));
        assert_eq!(repo.user_count(), 1);
    }
}
