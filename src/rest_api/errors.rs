//! # REST API Errors
//!
//! Error taxonomy for the HTTP surface. Every error reaches the caller as
//! a structured `{"error": message}` body with the mapped status code;
//! nothing is retried internally.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not valid JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Required body field is absent
    #[error("Invalid request body or missing '{0}' field")]
    MissingField(String),

    /// Required query parameter is absent
    #[error("No {0} provided")]
    MissingParam(String),

    /// Input is present but fails validation (wrong type, empty,
    /// oversized, malformed filter value)
    #[error("{0}")]
    Unprocessable(String),

    // ==================
    // Storage-mapped errors
    // ==================
    /// Store rejection: duplicate (409), miss (404), failure (500)
    #[error("{0}")]
    Store(#[from] StoreError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error outside the store
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure on a present-but-invalid input (422)
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::Unprocessable(msg.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,

            // 422 Unprocessable Entity
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,

            // Store outcomes keep their own mapping
            ApiError::Store(err) => match err {
                StoreError::Duplicate { .. } => StatusCode::CONFLICT,
                StoreError::NotFound => StatusCode::NOT_FOUND,
                StoreError::Snapshot(_) | StoreError::Internal(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingField("value".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unprocessable("empty").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_propagation() {
        let conflict = ApiError::from(StoreError::duplicate("hash"));
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(conflict.to_string(), "String already exists in the system");

        let missing = ApiError::from(StoreError::NotFound);
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);

        let broken = ApiError::from(StoreError::Snapshot("disk full".to_string()));
        assert_eq!(broken.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorResponse::from(&ApiError::MissingParam("query".to_string()));
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "No query provided");
    }
}
