//! # Predicates
//!
//! A predicate is a shared, thread-safe `Fn(&Value) -> bool`. Predicates are
//! expected to be deterministic and free of side effects; nothing enforces
//! that.

use std::fmt;
use std::sync::Arc;

use kilo_core::Value;

/// A named type's membership test.
///
/// Cloning is cheap: clones share the underlying closure.
#[derive(Clone)]
pub struct Predicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl Predicate {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Evaluate the predicate.
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_closure() {
        let p = Predicate::new(|v| v.is_truthy());
        let q = p.clone();
        assert!(q.test(&Value::from(1)));
        assert!(!p.test(&Value::Null));
        assert_eq!(format!("{p:?}"), "Predicate(..)");
    }
}
