//! Route sets for dishes, orders and any other registered resource

use axum::Router;
use indexmap::IndexMap;

/// One resource's routes
///
/// `build_routes` returns a router already bound to its own state, mounting
/// the collection path `/{plural}` and the item path `/{plural}/{id}`. Each
/// path answers unmapped verbs through
/// [`method_not_allowed`](crate::server::method_not_allowed).
pub trait EntityDescriptor: Send + Sync {
    /// Singular name, e.g. "dish"
    fn entity_type(&self) -> &str;

    /// Collection segment, e.g. "dishes"
    fn plural(&self) -> &str;

    fn build_routes(&self) -> Router;
}

/// Descriptors keyed by entity type, kept in registration order
///
/// A second descriptor for the same entity type takes the first one's place
/// (and position).
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: IndexMap<String, Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        let entity_type = descriptor.entity_type().to_string();
        if self.descriptors.contains_key(&entity_type) {
            tracing::warn!(entity_type = %entity_type, "entity registered twice; keeping the latest");
        }
        self.descriptors.insert(entity_type, descriptor);
    }

    /// Every registered route set merged into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .values()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.keys().map(String::as_str).collect()
    }

    /// `/dishes`, `/orders`, ... in registration order
    pub fn collection_paths(&self) -> Vec<String> {
        self.descriptors
            .values()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}
