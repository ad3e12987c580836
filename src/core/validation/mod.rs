//! Validation system
//!
//! Request data is checked by an ordered [`Pipeline`] of small checks before
//! it reaches a handler. Checks are built from the reusable
//! [`validators`] and read the body through the [`DataBody`] extractor.

pub mod extractor;
pub mod pipeline;
pub mod validators;

pub use extractor::DataBody;
pub use pipeline::{Candidate, Check, Pipeline};
