//! Module definition for the restaurant service
//!
//! Wires the dish and order stores to their services and routes, and loads
//! seed records at start-up.

use crate::config::{ConfigError, SeedData};
use crate::core::module::Module;
use crate::core::{ApiError, IdGenerator, RandomIdGenerator, Repository};
use crate::entities::dish::{Dish, DishDescriptor, DishService};
use crate::entities::order::{Order, OrderDescriptor, OrderService};
use crate::server::{EntityRegistry, ServerBuilder};
use crate::storage::InMemoryRepository;
use axum::Router;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Restaurant module
///
/// Handles:
/// - Dishes: the menu
/// - Orders: customer orders referencing dishes
#[derive(Clone)]
pub struct RestaurantModule {
    pub dishes: DishService,
    pub orders: OrderService,
}

impl RestaurantModule {
    pub fn new(
        dish_store: Arc<dyn Repository<Dish>>,
        order_store: Arc<dyn Repository<Order>>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            dishes: DishService::new(dish_store, ids.clone()),
            orders: OrderService::new(order_store, ids),
        }
    }

    /// Fresh, empty in-memory stores with random ids
    pub fn in_memory() -> Self {
        Self::in_memory_with_ids(Arc::new(RandomIdGenerator))
    }

    /// Fresh, empty in-memory stores with the given id generator
    pub fn in_memory_with_ids(ids: Arc<dyn IdGenerator>) -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Dish>::new()),
            Arc::new(InMemoryRepository::<Order>::new()),
            ids,
        )
    }

    /// Load seed records, validating each one like a create request
    ///
    /// Records carrying a non-empty string `id` keep it; the rest get a
    /// minted id. Stops at the first invalid record.
    pub async fn seed(&self, seed: &SeedData) -> Result<(), ConfigError> {
        for (index, record) in seed.dishes.iter().enumerate() {
            let result = match seed_id(record) {
                Some(id) => self.dishes.create_with_id(id, record).await,
                None => self.dishes.create(record).await,
            };
            result.map_err(|e| invalid_seed("dish", index, e))?;
        }

        for (index, record) in seed.orders.iter().enumerate() {
            let result = match seed_id(record) {
                Some(id) => self.orders.create_with_id(id, record).await,
                None => self.orders.create(record).await,
            };
            result.map_err(|e| invalid_seed("order", index, e))?;
        }

        tracing::info!(
            dishes = seed.dishes.len(),
            orders = seed.orders.len(),
            "seed data loaded"
        );
        Ok(())
    }

    /// Router exposing this module alone
    pub fn router(&self) -> Router {
        ServerBuilder::new().register_module(self.clone()).build()
    }
}

fn seed_id(record: &Map<String, Value>) -> Option<String> {
    record
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

fn invalid_seed(entity: &'static str, index: usize, err: ApiError) -> ConfigError {
    ConfigError::InvalidSeed {
        entity,
        index,
        message: err.to_string(),
    }
}

impl Module for RestaurantModule {
    fn name(&self) -> &str {
        "restaurant"
    }

    fn entity_types(&self) -> Vec<&str> {
        vec!["dish", "order"]
    }

    fn register_entities(&self, registry: &mut EntityRegistry) {
        registry.register(Box::new(DishDescriptor::new(self.dishes.clone())));
        registry.register(Box::new(OrderDescriptor::new(self.orders.clone())));
    }
}
