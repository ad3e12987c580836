//! Server module for building HTTP servers with auto-registered routes
//!
//! This module provides a `ServerBuilder` that registers:
//! - routes for all entities declared in modules
//! - health routes
//! - 404/405 fallbacks rendered through `ApiError`

pub mod builder;
pub mod entity_registry;
pub mod fallback;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use fallback::{method_not_allowed, path_not_found};
