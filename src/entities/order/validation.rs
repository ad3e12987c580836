//! Validation pipelines for order operations
//!
//! Create: deliverTo, mobileNumber, dishes present, dishes non-empty,
//! quantities, optional status.
//! Update: existence, optional status, id match, then the create field
//! checks. Delete: existence, then the pending guard.

use super::model::{Order, OrderFields, OrderItem, OrderStatus};
use crate::core::validation::validators::{
    id_absent_or_matches, non_empty_text, one_of, positive_integer, present,
};
use crate::core::{ApiError, Candidate, Pipeline};
use serde_json::Value;

const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

/// Values staged by the order checks
#[derive(Debug, Default)]
pub struct OrderDraft {
    pub deliver_to: Option<String>,
    pub mobile_number: Option<String>,
    pub raw_dishes: Option<Value>,
    pub dishes: Option<Vec<OrderItem>>,
    pub status: Option<OrderStatus>,
}

impl OrderDraft {
    /// Assemble the validated fields
    ///
    /// Only fails if the pipeline that produced the draft skipped a field
    /// check, which is a programming error.
    pub fn into_fields(self) -> Result<OrderFields, ApiError> {
        Ok(OrderFields {
            deliver_to: self.deliver_to.ok_or_else(|| unstaged("deliverTo"))?,
            mobile_number: self.mobile_number.ok_or_else(|| unstaged("mobileNumber"))?,
            status: self.status,
            dishes: self.dishes.ok_or_else(|| unstaged("dishes"))?,
        })
    }
}

fn unstaged(field: &str) -> ApiError {
    ApiError::internal(format!("order field '{}' was not validated", field))
}

pub fn order_not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Order id {} does not exist", id))
}

fn invalid_quantity(index: usize) -> ApiError {
    ApiError::validation(format!(
        "Dish {} must have a quantity that is an integer greater than 0",
        index
    ))
}

// <<------- CHECKS ------->>

pub fn order_exists(c: &Candidate<'_, Order>, _: &mut OrderDraft) -> Result<(), ApiError> {
    match c.current {
        Some(_) => Ok(()),
        None => Err(order_not_found(c.route_id())),
    }
}

/// Status is optional, but when supplied it must be one of the four values
pub fn status_is_valid(c: &Candidate<'_, Order>, draft: &mut OrderDraft) -> Result<(), ApiError> {
    if let Some(value) = c.field("status") {
        draft.status = Some(one_of(value, OrderStatus::parse, INVALID_STATUS)?);
    }
    Ok(())
}

pub fn order_id_absent_or_matches(
    c: &Candidate<'_, Order>,
    _: &mut OrderDraft,
) -> Result<(), ApiError> {
    let route_id = c.route_id();
    id_absent_or_matches(c.field("id"), route_id, |id| {
        format!(
            "Order id does not match route id. Order: {}, Route: {}",
            id, route_id
        )
    })
}

pub fn order_requires_deliver_to(
    c: &Candidate<'_, Order>,
    draft: &mut OrderDraft,
) -> Result<(), ApiError> {
    draft.deliver_to = Some(non_empty_text(
        c.field("deliverTo"),
        "Order must include a deliverTo",
    )?);
    Ok(())
}

pub fn order_requires_mobile_number(
    c: &Candidate<'_, Order>,
    draft: &mut OrderDraft,
) -> Result<(), ApiError> {
    draft.mobile_number = Some(non_empty_text(
        c.field("mobileNumber"),
        "Order must include a mobileNumber",
    )?);
    Ok(())
}

pub fn order_requires_dish(
    c: &Candidate<'_, Order>,
    draft: &mut OrderDraft,
) -> Result<(), ApiError> {
    draft.raw_dishes = Some(present(c.field("dishes"), "Order must include a dish")?.clone());
    Ok(())
}

pub fn dishes_must_be_non_empty_array(
    _: &Candidate<'_, Order>,
    draft: &mut OrderDraft,
) -> Result<(), ApiError> {
    match draft.raw_dishes.as_ref().and_then(Value::as_array) {
        Some(items) if !items.is_empty() => Ok(()),
        _ => Err(ApiError::validation("Order must include at least one dish")),
    }
}

/// Reports the zero-based index of the first offending line item
pub fn each_dish_must_have_quantity_above_zero(
    _: &Candidate<'_, Order>,
    draft: &mut OrderDraft,
) -> Result<(), ApiError> {
    let items = draft
        .raw_dishes
        .as_ref()
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::validation("Order must include at least one dish"))?;

    let mut dishes = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(invalid_quantity(index));
        };
        let mut dish = fields.clone();
        let quantity = dish
            .remove("quantity")
            .filter(|q| !q.is_null())
            .ok_or_else(|| invalid_quantity(index))?;
        let quantity = positive_integer(&quantity, "").map_err(|_| invalid_quantity(index))?;
        dishes.push(OrderItem::new(dish, quantity));
    }

    draft.dishes = Some(dishes);
    Ok(())
}

/// DELETE guard
pub fn order_status_is_pending(
    c: &Candidate<'_, Order>,
    _: &mut OrderDraft,
) -> Result<(), ApiError> {
    match c.current {
        Some(order) if order.status.is_deletable() => Ok(()),
        Some(_) => Err(ApiError::validation(
            "An order cannot be deleted unless it is pending",
        )),
        None => Err(order_not_found(c.route_id())),
    }
}

// <<------- PIPELINES ------->>

fn with_field_checks(pipeline: Pipeline<Order, OrderDraft>) -> Pipeline<Order, OrderDraft> {
    pipeline
        .step("order_requires_deliver_to", order_requires_deliver_to)
        .step("order_requires_mobile_number", order_requires_mobile_number)
        .step("order_requires_dish", order_requires_dish)
        .step("dishes_must_be_non_empty_array", dishes_must_be_non_empty_array)
        .step(
            "each_dish_must_have_quantity_above_zero",
            each_dish_must_have_quantity_above_zero,
        )
}

/// POST /orders
pub fn create_pipeline() -> Pipeline<Order, OrderDraft> {
    with_field_checks(Pipeline::new("order.create")).step("status_is_valid", status_is_valid)
}

/// PUT /orders/{order_id}
pub fn update_pipeline() -> Pipeline<Order, OrderDraft> {
    with_field_checks(
        Pipeline::new("order.update")
            .step("order_exists", order_exists)
            .step("status_is_valid", status_is_valid)
            .step("order_id_absent_or_matches", order_id_absent_or_matches),
    )
}

/// DELETE /orders/{order_id}
pub fn delete_pipeline() -> Pipeline<Order, OrderDraft> {
    Pipeline::new("order.delete")
        .step("order_exists", order_exists)
        .step("order_status_is_pending", order_status_is_pending)
}

/// GET /orders/{order_id}
pub fn read_pipeline() -> Pipeline<Order, OrderDraft> {
    Pipeline::new("order.read").step("order_exists", order_exists)
}
