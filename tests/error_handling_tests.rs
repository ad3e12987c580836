//! Tests for error rendering, routing fallbacks and health routes
//!
//! These tests verify that:
//! - every failure reaches the client as `{status, message}`
//! - unknown paths are 404 and unmapped verbs are 405
//! - bodies that are not JSON, or lack `data`, are handled predictably

mod common;

use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use common::*;
use dinein::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// ApiError rendering
// =============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::method_not_allowed("PATCH", "/dishes").status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_is_not_leaked() {
        let err = ApiError::internal("lock poisoned at store.rs:42");
        assert_eq!(
            err.to_response(),
            ErrorResponse {
                status: 500,
                message: "Internal server error".to_string(),
            }
        );
    }

    #[test]
    fn test_into_response_uses_error_status() {
        let response = ApiError::validation("Dish must include a name").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_repository_errors_become_internal() {
        let err: ApiError = anyhow::anyhow!("disk on fire").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }
}

// =============================================================================
// Routing fallbacks
// =============================================================================

mod routing {
    use super::*;

    #[tokio::test]
    async fn test_unknown_path_is_404() {
        let server = make_server();

        let response = server.get("/menus").await;

        assert_error(&response, 404, "Path not found: /menus");
    }

    #[tokio::test]
    async fn test_nested_unknown_path_is_404() {
        let server = make_server();

        let response = server.get("/dishes/abc/reviews").await;

        assert_error(&response, 404, "Path not found: /dishes/abc/reviews");
    }

    #[tokio::test]
    async fn test_unmapped_verbs_are_405() {
        let server = make_server();
        let cases = [
            (Method::DELETE, "/dishes"),
            (Method::PUT, "/dishes"),
            (Method::DELETE, "/dishes/abc"),
            (Method::POST, "/dishes/abc"),
            (Method::PATCH, "/orders"),
            (Method::POST, "/orders/abc"),
        ];

        for (method, path) in cases {
            let response = server.method(method.clone(), path).await;
            assert_error(
                &response,
                405,
                &format!("{} not allowed for {}", method, path),
            );
        }
    }
}

// =============================================================================
// Request bodies
// =============================================================================

mod bodies {
    use super::*;

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let server = make_server();

        let response = server.post("/dishes").text("{\"data\": {").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["status"], 400);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Request body must be valid JSON")
        );
    }

    #[tokio::test]
    async fn test_oversized_body_is_413() {
        let server = make_server();
        let description = "a".repeat(3 * 1024 * 1024);
        let payload = with_field(&taco(), "description", Some(json!(description)));

        let response = server.post("/dishes").json(&envelope(payload)).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = response.json();
        assert_eq!(body["status"], 413);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .starts_with("Failed to read request body")
        );
        let dishes: Value = server.get("/dishes").await.json();
        assert_eq!(dishes, json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_body_without_data_reports_first_missing_field() {
        let server = make_server();

        let response = server.post("/orders").json(&taco()).await;

        assert_error(&response, 400, "Order must include a deliverTo");
    }

    #[tokio::test]
    async fn test_empty_body_reports_first_missing_field() {
        let server = make_server();

        let response = server.post("/dishes").await;

        assert_error(&response, 400, "Dish must include a name");
    }

    #[tokio::test]
    async fn test_null_fields_count_as_missing() {
        let server = make_server();

        let payload = with_field(&taco(), "price", Some(Value::Null));
        let response = server.post("/dishes").json(&envelope(payload)).await;

        assert_error(&response, 400, "Dish must include a price");
    }
}

// =============================================================================
// Health
// =============================================================================

mod health {
    use super::*;

    #[tokio::test]
    async fn test_health_routes() {
        let server = make_server();

        for path in ["/health", "/healthz"] {
            let response = server.get(path).await;
            response.assert_status_ok();
            assert_eq!(
                response.json::<Value>(),
                json!({ "status": "ok", "service": "dinein" })
            );
        }
    }
}
