//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod service;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{Order, OrderFields, OrderItem, OrderStatus};
pub use service::OrderService;
