//! Order operations: validation pipeline + repository

use super::model::Order;
use super::validation::{self, order_not_found};
use crate::core::{ApiError, Candidate, IdGenerator, Repository};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Order operations shared by the HTTP handlers and seeding
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn Repository<Order>>,
    ids: Arc<dyn IdGenerator>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Repository<Order>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validate and store a new order under a freshly minted id
    pub async fn create(&self, data: &Map<String, Value>) -> Result<Order, ApiError> {
        let id = self.ids.next_id();
        self.create_with_id(id, data).await
    }

    /// Validate and store a new order under the given id
    pub async fn create_with_id(
        &self,
        id: String,
        data: &Map<String, Value>,
    ) -> Result<Order, ApiError> {
        let fields = validation::create_pipeline()
            .run(&Candidate::new(data))?
            .into_fields()?;

        let order = self.store.insert(Order::new(id, fields)).await?;
        tracing::info!(order_id = %order.id, status = %order.status, "order created");
        Ok(order)
    }

    pub async fn read(&self, order_id: &str) -> Result<Order, ApiError> {
        let current = self.store.find(order_id).await?;
        validation::read_pipeline().run(&Candidate::for_route(
            &Map::new(),
            order_id,
            current.as_ref(),
        ))?;
        current.ok_or_else(|| order_not_found(order_id))
    }

    /// Replace every mutable field of an existing order
    pub async fn update(
        &self,
        order_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Order, ApiError> {
        let current = self.store.find(order_id).await?;
        let fields = validation::update_pipeline()
            .run(&Candidate::for_route(data, order_id, current.as_ref()))?
            .into_fields()?;

        let mut order = current.ok_or_else(|| order_not_found(order_id))?;
        order.apply(fields);

        let order = self
            .store
            .replace(order_id, order)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;
        tracing::info!(order_id = %order.id, status = %order.status, "order updated");
        Ok(order)
    }

    /// Remove a pending order
    pub async fn delete(&self, order_id: &str) -> Result<(), ApiError> {
        let current = self.store.find(order_id).await?;
        validation::delete_pipeline().run(&Candidate::for_route(
            &Map::new(),
            order_id,
            current.as_ref(),
        ))?;

        self.store
            .remove(order_id)
            .await?
            .ok_or_else(|| order_not_found(order_id))?;
        tracing::info!(order_id = %order_id, "order deleted");
        Ok(())
    }

    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.store.list_all().await?)
    }
}
