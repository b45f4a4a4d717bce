//! Error types for the board shell.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    http::{header::ALLOW, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::backend::BackendError;

/// Unified error type for request handling.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ShellError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            ShellError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                format!("Pages only accept GET, got {method}"),
                None,
            ),
            ShellError::Backend(e) => {
                tracing::error!(error = %e, "Backend error");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "BACKEND_UNAVAILABLE",
                    "The backend is not initialized".to_string(),
                    Some(e.to_string()),
                )
            }
            ShellError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(ALLOW, HeaderValue::from_static("GET, HEAD"));
        }
        response
    }
}

/// Result type alias for request handlers.
pub type ShellResult<T> = Result<T, ShellError>;
