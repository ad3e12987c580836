//! # Dinein
//!
//! An in-memory HTTP API for a restaurant: a menu of dishes and the customer
//! orders placed against it.
//!
//! ## Features
//!
//! - **Validation pipelines**: every request runs an ordered list of named
//!   checks and the first failure decides the response
//! - **Data envelope**: request and response payloads live under `data`
//! - **Order lifecycle**: `pending` → `preparing` → `out-for-delivery` →
//!   `delivered`, with deletion restricted to pending orders
//! - **Configuration-Based**: bind address, log filter and seed data via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dinein::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     init_tracing("info");
//!     ServerBuilder::new()
//!         .register_module(RestaurantModule::in_memory())
//!         .serve("127.0.0.1:5000".parse()?)
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod restaurant;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        ApiError, Candidate, DataBody, Entity, Envelope, ErrorResponse, IdGenerator, Module,
        Pipeline, RandomIdGenerator, Repository, SequentialIdGenerator,
    };

    // === Entities ===
    pub use crate::entities::{
        Dish, DishService, Order, OrderItem, OrderService, OrderStatus,
    };
    pub use crate::restaurant::RestaurantModule;

    // === Storage ===
    pub use crate::storage::InMemoryRepository;

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError, SeedData};
    pub use crate::logging::init_tracing;

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
