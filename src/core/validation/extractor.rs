//! Axum extractor for the `{ "data": { ... } }` request envelope
//!
//! Handlers receive the inner `data` object as a JSON map. A body without a
//! `data` object yields an empty map, so that each validation step can
//! report the specific field that is missing. A body that is not JSON at
//! all is rejected with a 400 before any handler runs; a body that cannot be
//! read keeps the status axum chose for it (413 past the body limit).

use crate::core::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

/// The `data` member of a request body
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(service): State<DishService>,
///     DataBody(data): DataBody,
/// ) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
///     // data is the object inside {"data": ...}
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataBody(pub Map<String, Value>);

impl DataBody {
    /// Parse a raw body
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let payload: Value = serde_json::from_slice(bytes).map_err(|e| {
            ApiError::validation(format!("Request body must be valid JSON: {}", e))
        })?;

        Ok(Self::from_value(payload))
    }

    /// Pick the `data` object out of an already parsed body
    pub fn from_value(payload: Value) -> Self {
        match payload {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => Self(data),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<S> FromRequest<S> for DataBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::body_rejected(
                    rejection.status(),
                    format!("Failed to read request body: {}", rejection.body_text()),
                )
            })?;

        Self::from_slice(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_data_object() {
        let body = DataBody::from_slice(br#"{"data": {"name": "Taco"}}"#).unwrap();
        assert_eq!(body.0.get("name"), Some(&json!("Taco")));
    }

    #[test]
    fn test_missing_data_is_empty() {
        let body = DataBody::from_slice(br#"{"name": "Taco"}"#).unwrap();
        assert!(body.0.is_empty());
    }

    #[test]
    fn test_non_object_data_is_empty() {
        assert!(DataBody::from_value(json!({"data": [1, 2]})).0.is_empty());
        assert!(DataBody::from_value(json!("data")).0.is_empty());
    }

    #[test]
    fn test_empty_body_is_empty() {
        assert!(DataBody::from_slice(b"").unwrap().0.is_empty());
        assert!(DataBody::from_slice(b"  \n").unwrap().0.is_empty());
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = DataBody::from_slice(b"{not json").unwrap_err();
        assert!(err.to_string().starts_with("Request body must be valid JSON"));
    }
}
