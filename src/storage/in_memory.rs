//! In-memory implementation of Repository for development and testing

use crate::core::{Entity, Repository};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// In-memory repository keyed by id, iterated in insertion order
///
/// Cloning shares the underlying records. Uses RwLock for thread-safe
/// access; each call holds the lock only for its own duration.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    records: Arc<RwLock<IndexMap<String, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(IndexMap::new())),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn find(&self, id: &str) -> Result<Option<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.get(id).cloned())
    }

    async fn insert(&self, record: T) -> Result<T> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        if records.contains_key(record.id()) {
            return Err(anyhow!(
                "{} with id '{}' already exists",
                T::resource_name_singular(),
                record.id()
            ));
        }

        records.insert(record.id().to_string(), record.clone());

        Ok(record)
    }

    async fn replace(&self, id: &str, record: T) -> Result<Option<T>> {
        if record.id() != id {
            return Err(anyhow!(
                "cannot store {} '{}' under id '{}'",
                T::resource_name_singular(),
                record.id(),
                id
            ));
        }

        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        match records.get_mut(id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: &str) -> Result<Option<T>> {
        let mut records = self
            .records
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps the remaining records in insertion order
        Ok(records.shift_remove(id))
    }

    async fn list_all(&self) -> Result<Vec<T>> {
        let records = self
            .records
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(records.values().cloned().collect())
    }
}
