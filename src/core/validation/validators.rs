//! Reusable field validators
//!
//! Entity checks are built from these. Each returns the validated value so
//! it can be staged, or the [`ApiError`] carrying the caller's message.

use crate::core::error::ApiError;
use serde_json::Value;

/// Field must be present (not absent, not null)
pub fn present<'a>(value: Option<&'a Value>, message: &str) -> Result<&'a Value, ApiError> {
    value.ok_or_else(|| ApiError::validation(message))
}

/// Field must be a non-empty string
pub fn non_empty_text(value: Option<&Value>, message: &str) -> Result<String, ApiError> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ApiError::validation(message)),
    }
}

/// Value must be an integer strictly greater than zero
///
/// Floats with no fractional part (`8.0`) are accepted as integers, up to
/// 2^53. Larger floats cannot be stored without changing their value.
pub fn positive_integer(value: &Value, message: &str) -> Result<u64, ApiError> {
    as_whole_number(value)
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::validation(message))
}

/// Largest whole number an `f64` holds exactly
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

fn as_whole_number(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    if f.fract() == 0.0 && f >= 1.0 && f <= MAX_EXACT_FLOAT {
        Some(f as u64)
    } else {
        None
    }
}

/// Body id, if supplied, must equal the route id
///
/// An absent, null or empty-string id counts as not supplied. On mismatch
/// `mismatch` receives the body id rendered as text.
pub fn id_absent_or_matches(
    body_id: Option<&Value>,
    route_id: &str,
    mismatch: impl FnOnce(&str) -> String,
) -> Result<(), ApiError> {
    match body_id {
        None => Ok(()),
        Some(Value::String(id)) if id.is_empty() || id == route_id => Ok(()),
        Some(Value::String(id)) => Err(ApiError::validation(mismatch(id))),
        Some(other) => Err(ApiError::validation(mismatch(&other.to_string()))),
    }
}

/// Value must be a string naming one of the allowed variants
pub fn one_of<E>(
    value: &Value,
    parse: impl Fn(&str) -> Option<E>,
    message: &str,
) -> Result<E, ApiError> {
    value
        .as_str()
        .and_then(parse)
        .ok_or_else(|| ApiError::validation(message))
}
