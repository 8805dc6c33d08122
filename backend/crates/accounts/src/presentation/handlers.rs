//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, LogoutUseCase, RegisterInput, RegisterUseCase,
    ResolveSessionUseCase, UpdateProfileInput, UpdateProfileUseCase,
};
use crate::domain::repository::{SessionRepository, UserRepository};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UpdateUserInfoRequest, UserInfo,
    UserInfoResponse,
};
use kernel::id::UserId;

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone());

    use_case
        .execute(RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AccountAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountResult<impl IntoResponse>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    let cookie = state
        .config
        .cookie_config()
        .build_set_cookie(&output.session_token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
            user_id: output.user_id.to_string(),
        }),
    ))
}

// ============================================================================
// Logout
// ============================================================================

/// POST /api/logout
pub async fn logout<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> impl IntoResponse
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    if let Some(token) = extract_session_cookie(&headers, &state.config.session_cookie_name) {
        let use_case = LogoutUseCase::new(state.repo.clone(), state.config.clone());
        // Logout never fails the request; just clear the cookie
        let _ = use_case.execute(&token).await;
    }

    let cookie = state.config.cookie_config().build_delete_cookie();

    (
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
}

// ============================================================================
// User Info
// ============================================================================

/// GET /api/user
pub async fn user_info<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
) -> AccountResult<Json<UserInfoResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let user_id = resolve_session(&state, &headers).await?;

    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&user_id).await?;

    Ok(Json(UserInfoResponse {
        user: UserInfo {
            username: user.username.as_str().to_string(),
            email: user.email.as_str().to_string(),
        },
        user_id: user_id.to_string(),
    }))
}

/// PUT /api/update_user_info
pub async fn update_user_info<R>(
    State(state): State<AccountAppState<R>>,
    headers: HeaderMap,
    Json(req): Json<UpdateUserInfoRequest>,
) -> AccountResult<Json<MessageResponse>>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    // Session first: an unauthenticated request is 401 even when fields
    // are also missing
    let user_id = resolve_session(&state, &headers).await?;

    let use_case = UpdateProfileUseCase::new(state.repo.clone());
    use_case
        .execute(
            &user_id,
            UpdateProfileInput {
                username: req.username,
                email: req.email,
            },
        )
        .await?;

    Ok(Json(MessageResponse {
        message: "User info updated successfully".to_string(),
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

async fn resolve_session<R>(
    state: &AccountAppState<R>,
    headers: &HeaderMap,
) -> AccountResult<UserId>
where
    R: UserRepository + SessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(headers, &state.config.session_cookie_name)
        .ok_or(AccountError::NotLoggedIn)?;

    let use_case = ResolveSessionUseCase::new(state.repo.clone(), state.config.clone());
    use_case.resolve(&token).await
}

fn extract_session_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    platform::cookie::extract_cookie(headers, name)
}
