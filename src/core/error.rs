//! Typed error handling for the dinein API
//!
//! Every validation step, handler and fallback reports failure through
//! [`ApiError`]. Its HTTP rendering is centralized in the [`IntoResponse`]
//! implementation so that every failure reaches the client as:
//!
//! ```json
//! { "status": 400, "message": "Dish must include a name" }
//! ```
//!
//! # Error Categories
//!
//! - `NotFound`: the referenced record or path does not exist (404)
//! - `Validation`: missing or malformed field, id mismatch, invalid status,
//!   or an operation not allowed in the record's current state (400)
//! - `MethodNotAllowed`: the path exists but not for this verb (405)
//! - `BodyRejected`: the body could not be read; keeps axum's status,
//!   e.g. 413 past the body limit
//! - `Internal`: anything unexpected, e.g. a repository failure (500)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The error type returned by validators and handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The referenced record or path does not exist
    NotFound { message: String },

    /// The request is well-formed HTTP but its content is rejected
    Validation { message: String },

    /// The path exists but does not accept this method
    MethodNotAllowed { method: String, path: String },

    /// The request body could not be read at all
    BodyRejected { status: StatusCode, message: String },

    /// Unexpected failure; the detail is logged, never sent to the client
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }

    pub fn method_not_allowed(method: impl Into<String>, path: impl Into<String>) -> Self {
        ApiError::MethodNotAllowed {
            method: method.into(),
            path: path.into(),
        }
    }

    pub fn body_rejected(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::BodyRejected {
            status,
            message: message.into(),
        }
    }

    /// 404 for a path no route matches
    pub fn path_not_found(path: &str) -> Self {
        ApiError::not_found(format!("Path not found: {}", path))
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable code used in log records
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ApiError::BodyRejected { .. } => "BODY_REJECTED",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The message shown to clients
    ///
    /// Internal errors are masked so no implementation detail leaks.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Convert to the wire representation
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            message: self.public_message(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { message } => write!(f, "{}", message),
            ApiError::Validation { message } => write!(f, "{}", message),
            ApiError::BodyRejected { message, .. } => write!(f, "{}", message),
            ApiError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error body sent to clients
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Same value as the HTTP status line
    pub status: u16,
    /// Human-readable message
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(code = self.error_code(), "{}", detail);
        }
        let status = self.status_code();
        (status, Json(self.to_response())).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(format!("{:#}", err))
    }
}
