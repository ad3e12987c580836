//! Dish operations: validation pipeline + repository

use super::model::Dish;
use super::validation::{self, dish_not_found};
use crate::core::{ApiError, Candidate, IdGenerator, Repository};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Dish operations shared by the HTTP handlers and seeding
#[derive(Clone)]
pub struct DishService {
    store: Arc<dyn Repository<Dish>>,
    ids: Arc<dyn IdGenerator>,
}

impl DishService {
    pub fn new(store: Arc<dyn Repository<Dish>>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// Validate and store a new dish under a freshly minted id
    pub async fn create(&self, data: &Map<String, Value>) -> Result<Dish, ApiError> {
        let id = self.ids.next_id();
        self.create_with_id(id, data).await
    }

    /// Validate and store a new dish under the given id
    pub async fn create_with_id(
        &self,
        id: String,
        data: &Map<String, Value>,
    ) -> Result<Dish, ApiError> {
        let fields = validation::create_pipeline()
            .run(&Candidate::new(data))?
            .into_fields()?;

        let dish = self.store.insert(Dish::new(id, fields)).await?;
        tracing::info!(dish_id = %dish.id, "dish created");
        Ok(dish)
    }

    pub async fn read(&self, dish_id: &str) -> Result<Dish, ApiError> {
        let current = self.store.find(dish_id).await?;
        validation::read_pipeline().run(&Candidate::for_route(
            &Map::new(),
            dish_id,
            current.as_ref(),
        ))?;
        current.ok_or_else(|| dish_not_found(dish_id))
    }

    /// Replace every mutable field of an existing dish
    pub async fn update(&self, dish_id: &str, data: &Map<String, Value>) -> Result<Dish, ApiError> {
        let current = self.store.find(dish_id).await?;
        let fields = validation::update_pipeline()
            .run(&Candidate::for_route(data, dish_id, current.as_ref()))?
            .into_fields()?;

        let mut dish = current.ok_or_else(|| dish_not_found(dish_id))?;
        dish.apply(fields);

        let dish = self
            .store
            .replace(dish_id, dish)
            .await?
            .ok_or_else(|| dish_not_found(dish_id))?;
        tracing::info!(dish_id = %dish.id, "dish updated");
        Ok(dish)
    }

    pub async fn list(&self) -> Result<Vec<Dish>, ApiError> {
        Ok(self.store.list_all().await?)
    }
}
