//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, username::Username};

/// A registered student account.
///
/// The password is only ever held as an Argon2id PHC hash.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Display name, also editable via profile update
    pub username: Username,
    /// Unique login identifier, stored lowercased
    pub email: Email,
    pub password_hash: HashedPassword,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(username: Username, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            username,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
