//! Current User Use Case
//!
//! Loads the profile of an already-resolved user identity.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// Current user use case
pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId) -> AccountResult<User> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::{email::Email, username::Username};
    use crate::infra::memory::InMemoryAccountRepository;
    use platform::password::HashedPassword;

    fn sample_user() -> User {
        // A syntactically valid PHC string; never verified in these tests
        let hash = HashedPassword::from_phc_string(
            "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$GpZ3sK/oH9p7WIN+mBT3YLM+9aFySkvhJhpsVWMkQ2I",
        )
        .unwrap();
        User::new(
            Username::new("alice").unwrap(),
            Email::new("alice@example.com").unwrap(),
            hash,
        )
    }

    #[tokio::test]
    async fn test_current_user_found() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let user = sample_user();
        repo.insert_user_sync(user.clone());

        let use_case = CurrentUserUseCase::new(repo);
        let loaded = use_case.execute(&user.user_id).await.unwrap();
        assert_eq!(loaded.email.as_str(), "alice@example.com");
    }

    #[tokio::test]
    async fn test_current_user_missing() {
        let repo = Arc::new(InMemoryAccountRepository::new());
        let use_case = CurrentUserUseCase::new(repo);

        let result = use_case.execute(&UserId::new()).await;
        assert!(matches!(result, Err(AccountError::UserNotFound)));
    }
}
