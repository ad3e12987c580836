//! Entity trait shared by every stored record type

use serde::Serialize;

/// Base trait for all records held in a [`Repository`](crate::core::repository::Repository).
///
/// An entity has an opaque string id that is assigned once at creation and
/// never changes afterwards.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes", "orders")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "dish", "order")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}
