//! Shared API error taxonomy.
//!
//! Every route maps its service errors into `ApiError`, which renders
//! the `{"error": "..."}` envelope with the status code carrying the
//! category: 400 validation, 401/403 authorization, 404 not found,
//! 409 conflict, 500 timeout/internal. Internal details are never
//! leaked in 500 bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("report computation exceeded {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Timeout { .. } | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::store::LedgerError> for ApiError {
    fn from(err: crate::store::LedgerError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<crate::store::RegistryError> for ApiError {
    fn from(err: crate::store::RegistryError) -> Self {
        match err {
            crate::store::RegistryError::DuplicateNumber(_) => ApiError::Conflict(err.to_string()),
            crate::store::RegistryError::EmployeeNotFound(_) => ApiError::NotFound(err.to_string()),
            other => ApiError::Validation(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            // Internal detail stays in the log, not the body.
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "internal error");
                "internal error".to_string()
            }
            other => other.to_string(),
        };

        (self.status(), Json(ErrorResponse { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthorized("no".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Conflict("taken".into()).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::Timeout { timeout_ms: 5000 }.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_does_not_leak_detail() {
        let err = ApiError::Internal("connection refused to 10.0.0.3".into());
        assert_eq!(err.to_string(), "internal error");
    }
}
