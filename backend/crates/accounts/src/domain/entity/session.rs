//! Session Entity
//!
//! Server-side binding from an opaque client token to a user identity.
//! Created at login, destroyed at logout or by the expiry sweep.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use std::time::Duration;
use uuid::Uuid;

/// Session entity
#[derive(Debug, Clone)]
pub struct Session {
    /// Session ID (UUID v4); the signed cookie token references this
    pub session_id: Uuid,
    /// The bound user. A session without a user binding does not exist.
    pub user_id: UserId,
    /// Expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Create a new session bound to a user
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            expires_at_ms: now.timestamp_millis() + ttl.as_millis() as i64,
            created_at: now,
        }
    }

    /// Check if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_not_expired() {
        let session = Session::new(UserId::new(), Duration::from_secs(3600));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_zero_ttl_session_expires() {
        let mut session = Session::new(UserId::new(), Duration::from_secs(0));
        session.expires_at_ms = Utc::now().timestamp_millis() - 1;
        assert!(session.is_expired());
    }
}
