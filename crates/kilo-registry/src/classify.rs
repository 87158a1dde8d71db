//! # Classification
//!
//! The two queries built on the registry:
//!
//! - [`TypeRegistry::of`] evaluates every registered predicate and reports
//!   the names that matched.
//! - [`TypeRegistry::is`] evaluates only the predicates named by a
//!   [`TypeSpec`].
//!
//! ## Any-of Semantics
//!
//! `is(value, AnyOf([a, b]))` is true iff the predicate of `a` or of `b`
//! matches. Names outside the requested list never contribute, and every
//! requested name must be registered.

use kilo_core::{RegistryError, Value};
use serde::{Deserialize, Serialize};

use crate::predicate::Predicate;
use crate::registry::TypeRegistry;

/// The type names a value satisfies.
///
/// `Single` iff exactly one predicate matched. Zero matches and several
/// matches are both `Multiple`, ordered by registration.
///
/// Serializes untagged: a bare string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Classification {
    /// Exactly one registered type matched.
    Single(String),
    /// Zero or at least two registered types matched.
    Multiple(Vec<String>),
}

impl Classification {
    fn from_matches(mut matches: Vec<String>) -> Self {
        if matches.len() == 1 {
            Classification::Single(matches.remove(0))
        } else {
            Classification::Multiple(matches)
        }
    }

    /// Matched names in registration order.
    pub fn names(&self) -> &[String] {
        match self {
            Classification::Single(name) => std::slice::from_ref(name),
            Classification::Multiple(names) => names,
        }
    }

    /// Whether `name` matched.
    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|n| n == name)
    }

    /// Number of matched names.
    pub fn len(&self) -> usize {
        self.names().len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

/// The type (or types) a membership query asks about.
///
/// Deserializes untagged from either `"string"` or `["string", "null"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TypeSpec {
    /// Exactly this type.
    One(String),
    /// Any of these types.
    AnyOf(Vec<String>),
}

impl TypeSpec {
    /// Names referenced by this spec.
    pub fn names(&self) -> &[String] {
        match self {
            TypeSpec::One(name) => std::slice::from_ref(name),
            TypeSpec::AnyOf(names) => names,
        }
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::One(name.to_string())
    }
}

impl From<String> for TypeSpec {
    fn from(name: String) -> Self {
        TypeSpec::One(name)
    }
}

impl From<Vec<String>> for TypeSpec {
    fn from(names: Vec<String>) -> Self {
        TypeSpec::AnyOf(names)
    }
}

impl<const N: usize> From<[&str; N]> for TypeSpec {
    fn from(names: [&str; N]) -> Self {
        TypeSpec::AnyOf(names.iter().map(|n| n.to_string()).collect())
    }
}

impl TypeRegistry {
    /// Every registered type `value` satisfies.
    ///
    /// Never fails: an empty registry, or a value nothing matches, yields
    /// an empty `Multiple`.
    pub fn of(&self, value: &Value) -> Classification {
        let matches = self
            .snapshot()
            .into_iter()
            .filter(|(_, predicate)| predicate.test(value))
            .map(|(name, _)| name)
            .collect();
        Classification::from_matches(matches)
    }

    /// Whether `value` satisfies `spec`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::UnknownType`] for the first name in `spec` that is
    /// not registered.
    pub fn is(&self, value: &Value, spec: &TypeSpec) -> Result<bool, RegistryError> {
        match spec {
            TypeSpec::One(name) => Ok(self.lookup(name)?.test(value)),
            TypeSpec::AnyOf(names) => {
                let predicates = names
                    .iter()
                    .map(|name| self.lookup(name))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(predicates.iter().any(|p| p.test(value)))
            }
        }
    }

    /// Shorthand for [`is`](Self::is) with a single name.
    pub fn is_type(&self, value: &Value, name: &str) -> Result<bool, RegistryError> {
        Ok(self.lookup(name)?.test(value))
    }

    fn lookup(&self, name: &str) -> Result<Predicate, RegistryError> {
        self.predicate(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_string()))
    }
}
