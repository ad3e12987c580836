//! Order HTTP handlers

use super::{model::Order, service::OrderService};
use crate::core::{ApiError, DataBody, Envelope};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// POST /orders
pub async fn create_order(
    State(service): State<OrderService>,
    DataBody(data): DataBody,
) -> Result<(StatusCode, Json<Envelope<Order>>), ApiError> {
    let order = service.create(&data).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(order))))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
) -> Result<Json<Envelope<Order>>, ApiError> {
    service.read(&order_id).await.map(|o| Json(Envelope::new(o)))
}

/// PUT /orders/{order_id}
pub async fn update_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
    DataBody(data): DataBody,
) -> Result<Json<Envelope<Order>>, ApiError> {
    service
        .update(&order_id, &data)
        .await
        .map(|o| Json(Envelope::new(o)))
}

/// DELETE /orders/{order_id}
pub async fn delete_order(
    State(service): State<OrderService>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete(&order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /orders
pub async fn list_orders(
    State(service): State<OrderService>,
) -> Result<Json<Envelope<Vec<Order>>>, ApiError> {
    let orders = service.list().await?;
    Ok(Json(Envelope::new(orders)))
}
