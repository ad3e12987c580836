//! Identifier generation for newly created records

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Produces a fresh, unique identifier on every call
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random 32-character lowercase hex ids (128 bits of entropy)
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Deterministic ids (`{prefix}1`, `{prefix}2`, ...) for demos and tests
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}{}", self.prefix, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_ids_are_hex_and_unique() {
        let ids = RandomIdGenerator;
        let generated: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 100);
        for id in &generated {
            assert_eq!(id.len(), 32);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_sequential_ids() {
        let ids = SequentialIdGenerator::new("dish-");
        assert_eq!(ids.next_id(), "dish-1");
        assert_eq!(ids.next_id(), "dish-2");
    }
}
