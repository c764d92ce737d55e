//! Core business logic for the authentication system.

use crate::auth::models::{LoginRequest, SessionUser};
use crate::errors::{ServiceError, ServiceResult};
use crate::gateway::Gateway;
use std::sync::Arc;

/// Authentication service verifying credentials against the user table
pub struct AuthService {
    gateway: Arc<dyn Gateway>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Verify login credentials and produce the session record.
    ///
    /// Unknown email, inactive account and wrong password all collapse into
    /// `InvalidCredentials` so the response does not reveal which it was.
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<SessionUser> {
        let email = request.email.unwrap_or_default();
        let email = email.trim();
        let password = request.password.unwrap_or_default();

        if email.is_empty() || password.is_empty() {
            return Err(ServiceError::validation("Email y contraseña requeridos"));
        }

        let user = self
            .gateway
            .user_by_email(email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !user.active {
            return Err(ServiceError::InvalidCredentials);
        }

        // A malformed stored hash counts as a failed match, not a server error.
        let password_ok = bcrypt::verify(&password, &user.password).unwrap_or(false);
        if !password_ok {
            return Err(ServiceError::InvalidCredentials);
        }

        Ok(SessionUser {
            id: user.id,
            email: user.email,
            role: user.role,
        })
    }
}
