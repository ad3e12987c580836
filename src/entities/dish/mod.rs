//! Dish entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod validation;

pub use descriptor::DishDescriptor;
pub use handlers::*;
pub use model::{Dish, DishFields};
pub use service::DishService;
