//! Fallback handlers for unmatched methods and paths

use crate::core::ApiError;
use axum::http::{Method, Uri};

/// Method fallback for a known path: 405
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::method_not_allowed(method.as_str(), uri.path())
}

/// Router fallback for an unknown path: 404
pub async fn path_not_found(uri: Uri) -> ApiError {
    ApiError::path_not_found(uri.path())
}
