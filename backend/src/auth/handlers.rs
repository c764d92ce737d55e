//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for login and logout,
//! parse request data, and interact with the `auth::service` for credential
//! verification.

use crate::api::common::service_error_to_http;
use crate::auth::models::{LoginRequest, LoginResponse, SESSION_USER_KEY, SessionUser};
use crate::auth::service::AuthService;
use crate::errors::ServiceError;
use crate::gateway::Gateway;
use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::Json as ResponseJson,
};
use std::sync::Arc;
use tower_sessions::Session;

/// Handle user login request
#[axum::debug_handler]
pub async fn login(
    Extension(gateway): Extension<Arc<dyn Gateway>>,
    session: Session,
    Json(payload): Json<LoginRequest>,
) -> Result<ResponseJson<LoginResponse>, (StatusCode, String)> {
    let auth_service = AuthService::new(gateway);

    let user = match auth_service.login(payload).await {
        Ok(user) => user,
        Err(error) => return Err(service_error_to_http(error)),
    };

    session
        .insert(SESSION_USER_KEY, user.clone())
        .await
        .map_err(|error| service_error_to_http(ServiceError::internal(error.to_string())))?;

    Ok(ResponseJson(LoginResponse {
        success: true,
        user,
    }))
}

/// Handle logout request
#[axum::debug_handler]
pub async fn logout(session: Session) -> ResponseJson<serde_json::Value> {
    // Destruction is assumed to succeed; a session-layer failure is logged
    // and the client still gets its logout.
    if let Err(error) = session.flush().await {
        tracing::warn!("session teardown failed: {error}");
    }

    ResponseJson(serde_json::json!({ "success": true }))
}

/// Get the logged-in user for the current session
#[axum::debug_handler]
pub async fn me(Extension(user): Extension<SessionUser>) -> ResponseJson<SessionUser> {
    ResponseJson(user)
}
