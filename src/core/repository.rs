//! Storage abstraction for entity records

use crate::core::entity::Entity;
use anyhow::Result;
use async_trait::async_trait;

/// Storage capability for one entity type
///
/// Implementations must keep records in insertion order for
/// [`list_all`](Repository::list_all). The handlers are agnostic to the
/// underlying storage mechanism; validation code never touches it.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Get a record by id
    async fn find(&self, id: &str) -> Result<Option<T>>;

    /// Append a new record
    ///
    /// Fails if a record with the same id is already stored.
    async fn insert(&self, record: T) -> Result<T>;

    /// Replace the record stored under `id`, keeping its position
    ///
    /// Returns `None` when no record has that id.
    async fn replace(&self, id: &str, record: T) -> Result<Option<T>>;

    /// Remove a record, returning it if it was present
    async fn remove(&self, id: &str) -> Result<Option<T>>;

    /// All records in insertion order
    async fn list_all(&self) -> Result<Vec<T>>;
}
