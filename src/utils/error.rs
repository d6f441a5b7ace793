//! Error handling module
//!
//! Defines error types and handling logic used in the project

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Assistant engine error taxonomy
#[derive(Error, Debug)]
pub enum AssistError {
    /// No API key configured; callers switch to fallback content
    #[error("Gemini API key not set")]
    MissingCredential,

    /// Provider reported rate/usage limit exhaustion
    #[error("Gemini API quota exceeded. Please check your API usage limits.")]
    QuotaExceeded,

    /// Provider answered with a non-success status
    #[error("Gemini API error: {status}")]
    Provider {
        status: u16,
        message: Option<String>,
    },

    /// Request never produced an HTTP response
    #[error("Gemini transport error: {0}")]
    Transport(String),

    /// Success status but no usable candidate text
    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),
}

impl AssistError {
    /// Whether this error is a quota failure
    pub fn is_quota(&self) -> bool {
        matches!(self, AssistError::QuotaExceeded)
    }

    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AssistError::MissingCredential => "missing_credential",
            AssistError::QuotaExceeded => "quota_exceeded",
            AssistError::Provider { .. } => "provider_error",
            AssistError::Transport(_) => "transport_error",
            AssistError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Assistant result type alias
pub type AssistResult<T> = Result<T, AssistError>;

/// Application error types
///
/// Only request problems reach HTTP clients; assistant failures end in
/// fallback content
#[derive(Error, Debug)]
pub enum AppError {
    /// Request validation failed
    #[error("Request validation failed: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    /// Get error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "invalid_request_error",
            AppError::NotFound(_) => "not_found_error",
        }
    }

    /// Convert to the JSON error body
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            response_type: "error".to_string(),
            error: ErrorDetail {
                error_type: self.error_type().to_string(),
                message: self.to_string(),
            },
        }
    }
}

/// Implement IntoResponse trait to allow errors to be returned directly as HTTP responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::warn!("Client error: {} - Status code: {}", self, status);

        (status, Json(self.to_error_response())).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Error handling helper functions
pub mod helpers {
    use super::*;

    /// Create validation error
    pub fn validation_error(message: impl Into<String>) -> AppError {
        AppError::Validation(message.into())
    }

    /// Create not found error
    pub fn not_found_error(message: impl Into<String>) -> AppError {
        AppError::NotFound(message.into())
    }

    /// Reject blank text fields
    pub fn require_text(field: &str, value: &str) -> AppResult<()> {
        if value.trim().is_empty() {
            return Err(validation_error(format!("'{}' must not be empty", field)));
        }
        Ok(())
    }
}
