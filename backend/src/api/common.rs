//! Error handling utilities for API responses.
//!
//! Provides conversion between service-layer errors and HTTP responses. All
//! failures serialize to the same `{"error": "<message>"}` body; gateway and
//! internal causes are logged server-side and answered with a generic
//! message.

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable message
    pub error: String,
}

/// Converts ServiceError to appropriate HTTP response with standard format
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, message) = match error {
        ServiceError::Validation { message } => (StatusCode::BAD_REQUEST, message),
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "Credenciales inválidas".to_string(),
        ),
        ServiceError::Unauthenticated => (StatusCode::UNAUTHORIZED, "No autenticado".to_string()),
        ServiceError::AdminRequired => (
            StatusCode::FORBIDDEN,
            "No autorizado (admin requerido)".to_string(),
        ),
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "No existe".to_string()),
        ServiceError::Gateway { source } => {
            tracing::error!("Gateway error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno".to_string(),
            )
        }
        ServiceError::Internal { message } => {
            tracing::error!("Internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error interno".to_string(),
            )
        }
    };

    let body = ErrorBody { error: message };
    (status, serde_json::to_string(&body).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::GatewayError;

    fn decoded(result: (StatusCode, String)) -> (StatusCode, ErrorBody) {
        let (status, body) = result;
        (status, serde_json::from_str(&body).unwrap())
    }

    #[test]
    fn test_status_mapping() {
        let (status, body) = decoded(service_error_to_http(ServiceError::validation("falta X")));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "falta X");

        let (status, body) = decoded(service_error_to_http(ServiceError::InvalidCredentials));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Credenciales inválidas");

        let (status, body) = decoded(service_error_to_http(ServiceError::Unauthenticated));
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "No autenticado");

        let (status, body) = decoded(service_error_to_http(ServiceError::AdminRequired));
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error, "No autorizado (admin requerido)");

        let (status, body) = decoded(service_error_to_http(ServiceError::NotFound));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "No existe");
    }

    #[test]
    fn test_gateway_causes_are_masked() {
        let error = ServiceError::from(GatewayError::EmptyReply);
        let (status, body) = decoded(service_error_to_http(error));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Error interno");
    }
}
