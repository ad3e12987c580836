//! Validation pipelines for dish operations

use super::model::{Dish, DishFields};
use crate::core::validation::validators::{
    id_absent_or_matches, non_empty_text, positive_integer, present,
};
use crate::core::{ApiError, Candidate, Pipeline};
use serde_json::Value;

/// Values staged by the dish checks
#[derive(Debug, Default)]
pub struct DishDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub raw_price: Option<Value>,
    pub price: Option<u64>,
    pub image_url: Option<String>,
}

impl DishDraft {
    /// Assemble the validated fields
    ///
    /// Only fails if the pipeline that produced the draft skipped a field
    /// check, which is a programming error.
    pub fn into_fields(self) -> Result<DishFields, ApiError> {
        Ok(DishFields {
            name: self.name.ok_or_else(|| unstaged("name"))?,
            description: self.description.ok_or_else(|| unstaged("description"))?,
            price: self.price.ok_or_else(|| unstaged("price"))?,
            image_url: self.image_url.ok_or_else(|| unstaged("image_url"))?,
        })
    }
}

fn unstaged(field: &str) -> ApiError {
    ApiError::internal(format!("dish field '{}' was not validated", field))
}

pub fn dish_not_found(id: &str) -> ApiError {
    ApiError::not_found(format!("Dish does not exist: {}", id))
}

// <<------- CHECKS ------->>

pub fn dish_exists(c: &Candidate<'_, Dish>, _: &mut DishDraft) -> Result<(), ApiError> {
    match c.current {
        Some(_) => Ok(()),
        None => Err(dish_not_found(c.route_id())),
    }
}

pub fn dish_id_absent_or_matches(
    c: &Candidate<'_, Dish>,
    _: &mut DishDraft,
) -> Result<(), ApiError> {
    let route_id = c.route_id();
    id_absent_or_matches(c.field("id"), route_id, |id| {
        format!(
            "Dish id does not match route id. Dish: {}, Route: {}",
            id, route_id
        )
    })
}

pub fn dish_has_name(c: &Candidate<'_, Dish>, draft: &mut DishDraft) -> Result<(), ApiError> {
    draft.name = Some(non_empty_text(c.field("name"), "Dish must include a name")?);
    Ok(())
}

pub fn dish_has_description(
    c: &Candidate<'_, Dish>,
    draft: &mut DishDraft,
) -> Result<(), ApiError> {
    draft.description = Some(non_empty_text(
        c.field("description"),
        "Dish must include a description",
    )?);
    Ok(())
}

pub fn dish_has_price(c: &Candidate<'_, Dish>, draft: &mut DishDraft) -> Result<(), ApiError> {
    draft.raw_price = Some(present(c.field("price"), "Dish must include a price")?.clone());
    Ok(())
}

pub fn price_is_positive_integer(
    _: &Candidate<'_, Dish>,
    draft: &mut DishDraft,
) -> Result<(), ApiError> {
    let message = "Dish must have a price that is an integer greater than 0";
    let raw = draft
        .raw_price
        .as_ref()
        .ok_or_else(|| ApiError::validation(message))?;
    draft.price = Some(positive_integer(raw, message)?);
    Ok(())
}

pub fn dish_has_image_url(c: &Candidate<'_, Dish>, draft: &mut DishDraft) -> Result<(), ApiError> {
    draft.image_url = Some(non_empty_text(
        c.field("image_url"),
        "Dish must include a image_url",
    )?);
    Ok(())
}

// <<------- PIPELINES ------->>

fn with_field_checks(pipeline: Pipeline<Dish, DishDraft>) -> Pipeline<Dish, DishDraft> {
    pipeline
        .step("dish_has_name", dish_has_name)
        .step("dish_has_description", dish_has_description)
        .step("dish_has_price", dish_has_price)
        .step("price_is_positive_integer", price_is_positive_integer)
        .step("dish_has_image_url", dish_has_image_url)
}

/// POST /dishes
pub fn create_pipeline() -> Pipeline<Dish, DishDraft> {
    with_field_checks(Pipeline::new("dish.create"))
}

/// PUT /dishes/{dish_id}
pub fn update_pipeline() -> Pipeline<Dish, DishDraft> {
    with_field_checks(
        Pipeline::new("dish.update")
            .step("dish_exists", dish_exists)
            .step("dish_id_absent_or_matches", dish_id_absent_or_matches),
    )
}

/// GET /dishes/{dish_id}
pub fn read_pipeline() -> Pipeline<Dish, DishDraft> {
    Pipeline::new("dish.read").step("dish_exists", dish_exists)
}
