//! # HTTP API Errors
//!
//! Maps failures to status codes and JSON bodies. Client errors carry
//! `{message}`; server errors carry `{type: "error", message}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::store::{PersistError, StoreError};

/// Message for any single-record lookup that misses
pub const JOKE_NOT_FOUND: &str = "Joke not found";

/// Message for a batch delete naming an unknown id
pub const JOKES_NOT_FOUND: &str = "One or more jokes not found with the provided IDs";

/// Result type for handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP API errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("{0}")]
    Validation(String),

    /// Unknown id (404)
    #[error("{0}")]
    NotFound(String),

    /// Anything unexpected (500)
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
    pub message: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        let kind = match err {
            ApiError::Internal(_) => Some("error"),
            _ => None,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, message = %self, "request failed");
        }
        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::not_found(JOKE_NOT_FOUND),
            StoreError::NotFoundMany(_) => ApiError::not_found(JOKES_NOT_FOUND),
            StoreError::LikesOutOfRange(_) => ApiError::validation(err.to_string()),
            StoreError::DuplicateId(_) | StoreError::IdsExhausted => {
                ApiError::internal(err.to_string())
            }
        }
    }
}

impl From<PersistError> for ApiError {
    fn from(err: PersistError) -> Self {
        ApiError::internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::validation("Type is required").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::not_found(JOKE_NOT_FOUND).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert_eq!(
            ApiError::from(StoreError::NotFound(7)),
            ApiError::NotFound(JOKE_NOT_FOUND.to_string())
        );
        assert_eq!(
            ApiError::from(StoreError::NotFoundMany(vec![999])),
            ApiError::NotFound(JOKES_NOT_FOUND.to_string())
        );
        assert_eq!(
            ApiError::from(StoreError::DuplicateId(1)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(StoreError::LikesOutOfRange(3)),
            ApiError::Validation("Like counter out of range for joke 3".to_string())
        );
        assert_eq!(
            ApiError::from(StoreError::IdsExhausted).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_body_shapes() {
        let client = serde_json::to_value(ErrorResponse::from(ApiError::not_found(JOKE_NOT_FOUND)))
            .unwrap();
        assert_eq!(client, serde_json::json!({"message": "Joke not found"}));

        let server =
            serde_json::to_value(ErrorResponse::from(ApiError::internal("lock poisoned"))).unwrap();
        assert_eq!(
            server,
            serde_json::json!({"type": "error", "message": "lock poisoned"})
        );
    }
}
