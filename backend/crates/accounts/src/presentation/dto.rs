//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the frontend's wire format exactly.

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// POST /api/register request
///
/// Fields are optional so that presence is checked by the use case rather
/// than by deserialization; absent and empty both produce 400.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: String,
}

// ============================================================================
// User Info
// ============================================================================

/// Profile fields nested under `user`
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub username: String,
    pub email: String,
}

/// GET /api/user response
#[derive(Debug, Clone, Serialize)]
pub struct UserInfoResponse {
    pub user: UserInfo,
    pub user_id: String,
}

/// PUT /api/update_user_info request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserInfoRequest {
    pub username: Option<String>,
    pub email: Option<String>,
}

// ============================================================================
// Shared
// ============================================================================

/// Plain confirmation body
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
