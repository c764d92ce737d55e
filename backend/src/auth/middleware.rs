//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module contains logic for resolving the session cookie to a logged-in
//! user and enforcing role requirements across the API endpoints.

use crate::api::common::service_error_to_http;
use crate::auth::models::{SESSION_USER_KEY, SessionUser};
use crate::errors::ServiceError;
use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tower_sessions::Session;

/// Session authentication middleware
pub async fn require_auth(
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, String)> {
    // The session layer stores the session in request extensions.
    let session = request.extensions().get::<Session>().cloned().ok_or_else(|| {
        service_error_to_http(ServiceError::internal("session layer not installed"))
    })?;

    let user: Option<SessionUser> = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|error| service_error_to_http(ServiceError::internal(error.to_string())))?;

    match user {
        Some(user) => {
            // Add the session user to request extensions for use in handlers
            request.extensions_mut().insert(user);
            Ok(next.run(request).await)
        }
        None => Err(service_error_to_http(ServiceError::Unauthenticated)),
    }
}

/// Admin role authorization middleware
pub async fn require_admin(request: Request, next: Next) -> Result<Response, (StatusCode, String)> {
    // Set by require_auth earlier in the chain.
    let user = request
        .extensions()
        .get::<SessionUser>()
        .ok_or_else(|| service_error_to_http(ServiceError::Unauthenticated))?;

    if !user.is_admin() {
        return Err(service_error_to_http(ServiceError::AdminRequired));
    }

    Ok(next.run(request).await)
}
