//! Restaurant entities: dishes and orders

#[macro_use]
pub mod macros;

pub mod dish;
pub mod order;

pub use dish::{Dish, DishDescriptor, DishService};
pub use order::{Order, OrderDescriptor, OrderItem, OrderService, OrderStatus};
