//! Global application error types and handlers.
//!
//! This module defines custom error types that are used across the entire
//! backend application and provides mechanisms for consistent error handling
//! and response formatting.

use crate::gateway::GatewayError;
use thiserror::Error;

/// Generic service error that can be used across all entities
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{message}")]
    Validation { message: String },

    /// Unknown email, inactive account, or wrong password. One variant so
    /// the caller cannot tell the three apart.
    #[error("Credenciales inválidas")]
    InvalidCredentials,

    #[error("No autenticado")]
    Unauthenticated,

    #[error("No autorizado (admin requerido)")]
    AdminRequired,

    #[error("No existe")]
    NotFound,

    #[error("Gateway error: {source}")]
    Gateway {
        #[from]
        source: GatewayError,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
