//! Dish HTTP handlers

use super::{model::Dish, service::DishService};
use crate::core::{ApiError, DataBody, Envelope};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

/// POST /dishes
pub async fn create_dish(
    State(service): State<DishService>,
    DataBody(data): DataBody,
) -> Result<(StatusCode, Json<Envelope<Dish>>), ApiError> {
    let dish = service.create(&data).await?;
    Ok((StatusCode::CREATED, Json(Envelope::new(dish))))
}

/// GET /dishes/{dish_id}
pub async fn get_dish(
    State(service): State<DishService>,
    Path(dish_id): Path<String>,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    service.read(&dish_id).await.map(|d| Json(Envelope::new(d)))
}

/// PUT /dishes/{dish_id}
pub async fn update_dish(
    State(service): State<DishService>,
    Path(dish_id): Path<String>,
    DataBody(data): DataBody,
) -> Result<Json<Envelope<Dish>>, ApiError> {
    service
        .update(&dish_id, &data)
        .await
        .map(|d| Json(Envelope::new(d)))
}

/// GET /dishes
pub async fn list_dishes(
    State(service): State<DishService>,
) -> Result<Json<Envelope<Vec<Dish>>>, ApiError> {
    let dishes = service.list().await?;
    Ok(Json(Envelope::new(dishes)))
}
