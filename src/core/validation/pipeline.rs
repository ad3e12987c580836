//! Ordered, short-circuiting validation pipelines
//!
//! A [`Pipeline`] is a fixed list of named checks for one operation
//! (e.g. "dish.update"). Each check sees the request [`Candidate`] and may
//! stage the value it validated into a draft `S`, which the handler turns
//! into a typed record once every check has passed. The first failing
//! check ends the run; later checks and the handler never execute.

use crate::core::error::ApiError;
use serde_json::{Map, Value};

/// What a check is allowed to look at
///
/// `data` is the `data` member of the request body, `route_id` is the id
/// from the URL (if the route has one) and `current` is the stored record
/// under that id, if any.
#[derive(Debug)]
pub struct Candidate<'a, T> {
    pub data: &'a Map<String, Value>,
    pub route_id: Option<&'a str>,
    pub current: Option<&'a T>,
}

impl<'a, T> Candidate<'a, T> {
    /// Candidate for a route without an id (create)
    pub fn new(data: &'a Map<String, Value>) -> Self {
        Self {
            data,
            route_id: None,
            current: None,
        }
    }

    /// Candidate for a route addressing an existing record
    pub fn for_route(data: &'a Map<String, Value>, route_id: &'a str, current: Option<&'a T>) -> Self {
        Self {
            data,
            route_id: Some(route_id),
            current,
        }
    }

    /// A body field, treating JSON `null` as absent
    pub fn field(&self, name: &str) -> Option<&'a Value> {
        self.data.get(name).filter(|v| !v.is_null())
    }

    /// The route id, or an empty string for routes without one
    pub fn route_id(&self) -> &'a str {
        self.route_id.unwrap_or_default()
    }
}

/// A single validation step
pub type Check<T, S> = fn(&Candidate<'_, T>, &mut S) -> Result<(), ApiError>;

struct Step<T, S> {
    name: &'static str,
    check: Check<T, S>,
}

/// Ordered list of checks for one operation
pub struct Pipeline<T, S> {
    name: &'static str,
    steps: Vec<Step<T, S>>,
}

impl<T, S: Default> Pipeline<T, S> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    /// Append a check
    pub fn step(mut self, name: &'static str, check: Check<T, S>) -> Self {
        self.steps.push(Step { name, check });
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Step names in execution order
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.name).collect()
    }

    /// Run every check in order, stopping at the first failure
    pub fn run(&self, candidate: &Candidate<'_, T>) -> Result<S, ApiError> {
        let mut draft = S::default();
        for step in &self.steps {
            if let Err(err) = (step.check)(candidate, &mut draft) {
                tracing::debug!(
                    pipeline = self.name,
                    step = step.name,
                    status = err.status_code().as_u16(),
                    "request rejected: {}",
                    err
                );
                return Err(err);
            }
        }
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Default)]
    struct Trace {
        visited: Vec<&'static str>,
    }

    fn first(_: &Candidate<'_, ()>, t: &mut Trace) -> Result<(), ApiError> {
        t.visited.push("first");
        Ok(())
    }

    fn reject(c: &Candidate<'_, ()>, _: &mut Trace) -> Result<(), ApiError> {
        if c.field("ok").is_some() {
            Ok(())
        } else {
            Err(ApiError::validation("missing ok"))
        }
    }

    fn last(_: &Candidate<'_, ()>, t: &mut Trace) -> Result<(), ApiError> {
        t.visited.push("last");
        Ok(())
    }

    fn pipeline() -> Pipeline<(), Trace> {
        Pipeline::new("test.op")
            .step("first", first)
            .step("reject", reject)
            .step("last", last)
    }

    #[test]
    fn test_runs_every_step_in_order() {
        let data = json!({"ok": true});
        let map = data.as_object().unwrap();
        let trace = pipeline().run(&Candidate::new(map)).unwrap();
        assert_eq!(trace.visited, vec!["first", "last"]);
    }

    #[test]
    fn test_short_circuits_on_first_failure() {
        let map = Map::new();
        let err = pipeline().run(&Candidate::new(&map)).err().unwrap();
        assert_eq!(err, ApiError::validation("missing ok"));
    }

    #[test]
    fn test_null_field_is_absent() {
        let data = json!({"ok": null});
        let map = data.as_object().unwrap();
        assert!(pipeline().run(&Candidate::new(map)).is_err());
    }

    #[test]
    fn test_step_names() {
        let p = pipeline();
        assert_eq!(p.name(), "test.op");
        assert_eq!(p.step_names(), vec!["first", "reject", "last"]);
    }

    #[test]
    fn test_route_id_defaults_to_empty() {
        let map = Map::new();
        let c: Candidate<'_, ()> = Candidate::new(&map);
        assert_eq!(c.route_id(), "");
        let c: Candidate<'_, ()> = Candidate::for_route(&map, "abc", None);
        assert_eq!(c.route_id(), "abc");
    }
}
