//! Entity descriptor for Order

use super::{
    create_order, delete_order, get_order, list_orders, service::OrderService, update_order,
};
use crate::server::{EntityDescriptor, method_not_allowed};
use axum::{Router, routing::get};

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub service: OrderService,
}

impl OrderDescriptor {
    pub fn new(service: OrderService) -> Self {
        Self { service }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{order_id}",
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(self.service.clone())
    }
}
