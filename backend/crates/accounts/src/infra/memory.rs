//! In-Memory Repository
//!
//! Test double for the account repositories. Each collaborator is injected
//! at construction, so use cases run against this without a database.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::entity::{session::Session, user::User};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::domain::value_object::{email::Email, username::Username};
use crate::error::{AccountError, AccountResult};
use kernel::id::UserId;

/// In-memory account repository
#[derive(Default)]
pub struct InMemoryAccountRepository {
    users: Mutex<HashMap<Uuid, User>>,
    sessions: Mutex<HashMap<Uuid, Session>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard<'a, T>(m: &'a Mutex<T>) -> AccountResult<MutexGuard<'a, T>> {
        m.lock()
            .map_err(|_| AccountError::Internal("repository lock poisoned".to_string()))
    }

    // Synchronous accessors for test assertions

    pub fn user_count(&self) -> usize {
        self.users.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn insert_user_sync(&self, user: User) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(*user.user_id.as_uuid(), user);
        }
    }

    pub fn insert_session_sync(&self, session: Session) {
        if let Ok(mut sessions) = self.sessions.lock() {
            sessions.insert(session.session_id, session);
        }
    }

    pub fn find_by_email_sync(&self, email: &Email) -> Option<User> {
        self.users
            .lock()
            .ok()?
            .values()
            .find(|u| u.email == *email)
            .cloned()
    }

    pub fn find_session_sync(&self, session_id: Uuid) -> Option<Session> {
        self.sessions.lock().ok()?.get(&session_id).cloned()
    }
}

impl UserRepository for InMemoryAccountRepository {
    async fn create(&self, user: &User) -> AccountResult<()> {
        let mut users = Self::guard(&self.users)?;
        users.insert(*user.user_id.as_uuid(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AccountResult<Option<User>> {
        let users = Self::guard(&self.users)?;
        Ok(users.get(user_id.as_uuid()).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AccountResult<Option<User>> {
        let users = Self::guard(&self.users)?;
        Ok(users.values().find(|u| u.email == *email).cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AccountResult<bool> {
        let users = Self::guard(&self.users)?;
        Ok(users.values().any(|u| u.email == *email))
    }

    async fn update_profile(
        &self,
        user_id: &UserId,
        username: &Username,
        email: &Email,
    ) -> AccountResult<()> {
        let mut users = Self::guard(&self.users)?;
        if let Some(user) = users.get_mut(user_id.as_uuid()) {
            user.username = username.clone();
            user.email = email.clone();
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

impl SessionRepository for InMemoryAccountRepository {
    async fn create(&self, session: &Session) -> AccountResult<()> {
        let mut sessions = Self::guard(&self.sessions)?;
        sessions.insert(session.session_id, session.clone());
        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AccountResult<Option<Session>> {
        let sessions = Self::guard(&self.sessions)?;
        Ok(sessions.get(&session_id).cloned())
    }

    async fn delete(&self, session_id: Uuid) -> AccountResult<()> {
        let mut sessions = Self::guard(&self.sessions)?;
        sessions.remove(&session_id);
        Ok(())
    }

    async fn delete_all_for_user(&self, user_id: &UserId) -> AccountResult<u64> {
        let mut sessions = Self::guard(&self.sessions)?;
        let before = sessions.len();
        sessions.retain(|_, s| s.user_id != *user_id);
        Ok((before - sessions.len()) as u64)
    }

    async fn cleanup_expired(&self) -> AccountResult<u64> {
        let mut sessions = Self::guard(&self.sessions)?;
        let now_ms = Utc::now().timestamp_millis();
        let before = sessions.len();
        sessions.retain(|_, s| s.expires_at_ms >= now_ms);
        Ok((before - sessions.len()) as u64)
    }
}
