//! Module system
//!
//! A module groups entity types and knows how to register their routes.

use crate::server::entity_registry::EntityRegistry;

/// Trait for a service module
pub trait Module: Send + Sync {
    /// Unique module name
    fn name(&self) -> &str;

    /// Module version
    fn version(&self) -> &str {
        "1.0.0"
    }

    /// List of entity types managed by this module
    fn entity_types(&self) -> Vec<&str>;

    /// Register entities with the entity registry
    ///
    /// This method should register all entity descriptors for the module.
    /// Each entity descriptor provides the routes for that entity.
    fn register_entities(&self, registry: &mut EntityRegistry);
}
