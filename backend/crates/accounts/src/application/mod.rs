//! Application Layer - Use Cases

pub mod config;
pub mod current_user;
pub mod login;
pub mod logout;
pub mod register;
pub mod resolve_session;
pub mod session_token;
pub mod update_profile;

pub use current_user::CurrentUserUseCase;
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use logout::LogoutUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_session::ResolveSessionUseCase;
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};

use crate::error::{AccountError, AccountResult};

/// Require a field to be present and non-empty.
///
/// The original frontend sends absent fields as missing JSON keys and
/// sometimes as empty strings; both count as missing.
pub(crate) fn require_field(value: Option<String>) -> AccountResult<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(AccountError::MissingFields),
    }
}
