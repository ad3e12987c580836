//! `{ "data": ... }` response wrapper

use serde::Serialize;

/// Every successful response body is wrapped in a `data` member
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
