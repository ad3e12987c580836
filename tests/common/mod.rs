//! Shared fixtures for the HTTP integration tests
//!
//! Every test builds its own server over fresh in-memory stores, so no state
//! leaks between tests.

#![allow(dead_code)]

use axum_test::TestServer;
use dinein::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

/// Server with random ids
pub fn make_server() -> TestServer {
    TestServer::new(RestaurantModule::in_memory().router())
}

/// Server with predictable ids (`id1`, `id2`, ...)
pub fn make_sequential_server() -> TestServer {
    let module = RestaurantModule::in_memory_with_ids(Arc::new(SequentialIdGenerator::new("id")));
    TestServer::new(module.router())
}

/// Server plus direct access to the module's services
pub fn make_server_with_module() -> (TestServer, RestaurantModule) {
    let module = RestaurantModule::in_memory();
    let server = TestServer::new(module.router());
    (server, module)
}

pub fn taco() -> Value {
    json!({
        "name": "Taco",
        "description": "Spicy",
        "price": 8,
        "image_url": "http://x"
    })
}

pub fn order_payload() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "dishes": [
            {
                "id": "d351db2b49b69679504652ea1cf38241",
                "name": "Dolcelatte and chickpea spaghetti",
                "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                "image_url": "https://images.example.com/spaghetti.jpg",
                "price": 19,
                "quantity": 2
            }
        ]
    })
}

/// Wrap a payload in the request envelope
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

/// Copy of `payload` with `field` replaced (or removed when `value` is None)
pub fn with_field(payload: &Value, field: &str, value: Option<Value>) -> Value {
    let mut payload = payload.clone();
    if let Some(map) = payload.as_object_mut() {
        match value {
            Some(value) => {
                map.insert(field.to_string(), value);
            }
            None => {
                map.remove(field);
            }
        }
    }
    payload
}

/// POST a dish and return the created record
pub async fn create_dish(server: &TestServer, dish: Value) -> Value {
    let response = server.post("/dishes").json(&envelope(dish)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

/// POST an order and return the created record
pub async fn create_order(server: &TestServer, order: Value) -> Value {
    let response = server.post("/orders").json(&envelope(order)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()["data"].clone()
}

/// Create an order, then move it to `status`
pub async fn create_order_with_status(server: &TestServer, status: &str) -> Value {
    let order = create_order(server, order_payload()).await;
    let id = order["id"].as_str().unwrap().to_string();
    let update = with_field(&order_payload(), "status", Some(json!(status)));
    let response = server
        .put(&format!("/orders/{}", id))
        .json(&envelope(update))
        .await;
    response.assert_status_ok();
    response.json::<Value>()["data"].clone()
}

/// Assert the `{status, message}` error body
pub fn assert_error(response: &axum_test::TestResponse, status: u16, message: &str) {
    assert_eq!(response.status_code().as_u16(), status);
    let body: Value = response.json();
    assert_eq!(body, json!({ "status": status, "message": message }));
}
