//! Order entity model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Only pending orders may be deleted
    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown order status '{}'", s))
    }
}

/// One line of an order
///
/// `dish` holds the dish reference exactly as the client sent it: either
/// `{"dishId": ...}` or an embedded copy of the dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    /// Always > 0
    pub quantity: u64,
}

impl OrderItem {
    pub fn new(dish: Map<String, Value>, quantity: u64) -> Self {
        Self { dish, quantity }
    }
}

/// A customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    /// Never empty
    pub dishes: Vec<OrderItem>,
}

impl_entity!(Order, "order", "orders");

/// Every client-writable field of an order, already validated
///
/// `status` is `None` when the client did not send one.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderItem>,
}

impl Order {
    /// New order; status defaults to pending
    pub fn new(id: impl Into<String>, fields: OrderFields) -> Self {
        Self {
            id: id.into(),
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or_default(),
            dishes: fields.dishes,
        }
    }

    /// Overwrite the mutable fields; the id is left untouched and an
    /// absent status keeps the current one
    pub fn apply(&mut self, fields: OrderFields) {
        self.deliver_to = fields.deliver_to;
        self.mobile_number = fields.mobile_number;
        if let Some(status) = fields.status {
            self.status = status;
        }
        self.dishes = fields.dishes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(dish_id: &str, quantity: u64) -> OrderItem {
        let mut dish = Map::new();
        dish.insert("dishId".into(), json!(dish_id));
        OrderItem::new(dish, quantity)
    }

    fn fields(status: Option<OrderStatus>) -> OrderFields {
        OrderFields {
            deliver_to: "1 Main St".into(),
            mobile_number: "555-0100".into(),
            status,
            dishes: vec![item("d1", 2)],
        }
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out-for-delivery")
        );
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
            assert_eq!(status.to_string().parse::<OrderStatus>().unwrap(), status);
        }
        assert_eq!(OrderStatus::parse("cancelled"), None);
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_only_pending_is_deletable() {
        assert!(OrderStatus::Pending.is_deletable());
        assert!(!OrderStatus::Preparing.is_deletable());
        assert!(!OrderStatus::OutForDelivery.is_deletable());
        assert!(!OrderStatus::Delivered.is_deletable());
    }

    #[test]
    fn test_new_defaults_to_pending() {
        let order = Order::new("o1", fields(None));
        assert_eq!(order.status, OrderStatus::Pending);

        let order = Order::new("o1", fields(Some(OrderStatus::Preparing)));
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_apply_keeps_status_when_absent() {
        let mut order = Order::new("o1", fields(Some(OrderStatus::Preparing)));
        order.apply(fields(None));
        assert_eq!(order.status, OrderStatus::Preparing);

        order.apply(fields(Some(OrderStatus::Delivered)));
        assert_eq!(order.status, OrderStatus::Delivered);
        assert_eq!(order.id, "o1");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let order = Order::new("o1", fields(None));
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id": "o1",
                "deliverTo": "1 Main St",
                "mobileNumber": "555-0100",
                "status": "pending",
                "dishes": [{"dishId": "d1", "quantity": 2}]
            })
        );
    }

    #[test]
    fn test_line_item_keeps_embedded_dish() {
        let item: OrderItem = serde_json::from_value(json!({
            "id": "d1",
            "name": "Taco",
            "price": 8,
            "quantity": 3
        }))
        .unwrap();
        assert_eq!(item.quantity, 3);
        assert_eq!(item.dish.get("name"), Some(&json!("Taco")));
        assert!(!item.dish.contains_key("quantity"));
    }

    #[test]
    fn test_resource_names() {
        use crate::core::Entity;

        assert_eq!(Order::resource_name(), "orders");
        assert_eq!(Order::resource_name_singular(), "order");
        let order = Order::new("o-7", fields(None));
        assert_eq!(Entity::id(&order), "o-7");
    }
}
