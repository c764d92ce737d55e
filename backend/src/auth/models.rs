//! Data structures for authentication-related entities.
//!
//! This module defines the login request/response payloads and the session
//! record kept server-side for a logged-in user.

use serde::{Deserialize, Serialize};

/// Session key under which the logged-in user is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Login request payload. Fields are optional so a missing one surfaces as a
/// 400 instead of a body-level deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// User record held in the session for the duration of a login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: i64,
    pub email: String,
    pub role: String,
}

impl SessionUser {
    /// Check if the user has the admin role
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Login response containing the session user
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: SessionUser,
}
