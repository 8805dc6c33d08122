//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in the
//! infrastructure layer.

use crate::domain::entity::{session::Session, user::User};
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::AccountResult;
use kernel::id::UserId;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a new user
    async fn create(&self, user: &User) -> AccountResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>>;

    /// Check if email exists
    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool>;

    /// Update username and email for a user
    async fn update_profile(
        &self,
        user_id: &UserId,
        username: &Username,
        email: &Email,
    ) -> AccountResult<()>;
}

/// Session repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &Session) -> AccountResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AccountResult<Option<Session>>;

    /// Delete a session
    async fn delete(&self, session_id: Uuid) -> AccountResult<()>;

    /// Delete all sessions for a user
    async fn delete_all_for_user(&self, user_id: &UserId) -> AccountResult<u64>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AccountResult<u64>;
}
