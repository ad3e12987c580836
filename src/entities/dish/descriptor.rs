//! Entity descriptor for Dish

use super::{create_dish, get_dish, list_dishes, service::DishService, update_dish};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};

/// Descriptor for the Dish entity
pub struct DishDescriptor {
    pub service: DishService,
}

impl DishDescriptor {
    pub fn new(service: DishService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(self.service.clone())
    }
}
