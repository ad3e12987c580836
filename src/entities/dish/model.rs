//! Dish entity model

use serde::{Deserialize, Serialize};

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole currency units, always > 0
    pub price: u64,
    pub image_url: String,
}

impl_entity!(Dish, "dish", "dishes");

/// Every client-writable field of a dish, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

impl Dish {
    pub fn new(id: impl Into<String>, fields: DishFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        }
    }

    /// Overwrite the mutable fields; the id is left untouched
    pub fn apply(&mut self, fields: DishFields) {
        self.name = fields.name;
        self.description = fields.description;
        self.price = fields.price;
        self.image_url = fields.image_url;
    }
}
