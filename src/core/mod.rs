//! Core module containing fundamental traits and types

pub mod entity;
pub mod envelope;
pub mod error;
pub mod id;
pub mod module;
pub mod repository;
pub mod validation;

pub use entity::Entity;
pub use envelope::Envelope;
pub use error::{ApiError, ErrorResponse};
pub use id::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use module::Module;
pub use repository::Repository;
pub use validation::{Candidate, DataBody, Pipeline};
