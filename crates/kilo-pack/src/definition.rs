//! # Type Definitions
//!
//! A [`TypeDef`] is a set of constraints; a value belongs to the type when
//! it satisfies every constraint present.
//!
//! | constraint | holds when |
//! |------------|------------|
//! | `pattern` | the value is a primitive (or boxed string) and its string form matches the regex |
//! | `one_of` | the value is a string equal to one of the literals |
//! | `range` | the value is a finite number within the inclusive bounds |
//! | `length` | the value is a string (char count) or array (element count) within the inclusive bounds |
//!
//! A definition with no constraints is rejected: it would either match
//! everything or nothing, and neither is what the author meant.

use kilo_core::{RegistryError, Value};
use kilo_registry::{Predicate, TypeRegistry};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// Inclusive bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bounds<T> {
    /// Lower bound, inclusive.
    #[serde(default)]
    pub min: Option<T>,
    /// Upper bound, inclusive.
    #[serde(default)]
    pub max: Option<T>,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    fn contains(&self, x: T) -> bool {
        self.min.map_or(true, |min| x >= min) && self.max.map_or(true, |max| x <= max)
    }

    fn is_inverted(&self) -> bool {
        matches!((self.min, self.max), (Some(min), Some(max)) if min > max)
    }
}

/// Declarative description of one type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDef {
    /// Regex the value's string form must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Allowed string literals.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<String>>,
    /// Allowed numeric range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Bounds<f64>>,
    /// Allowed string or array length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<Bounds<usize>>,
}

impl TypeDef {
    /// A definition constrained by a regex.
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// A definition constrained to string literals.
    pub fn one_of<S: Into<String>>(literals: impl IntoIterator<Item = S>) -> Self {
        Self {
            one_of: Some(literals.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// A definition constrained to a numeric range.
    pub fn range(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            range: Some(Bounds { min, max }),
            ..Self::default()
        }
    }

    /// A definition constrained to a length range.
    pub fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self {
            length: Some(Bounds { min, max }),
            ..Self::default()
        }
    }

    /// Compile into a predicate.
    ///
    /// `type_name` is only used in error messages.
    ///
    /// # Errors
    ///
    /// [`PackError::InvalidDefinition`] when no constraint is present, the
    /// pattern does not compile, or a range is inverted or non-finite.
    pub fn compile(&self, type_name: &str) -> Result<Predicate, PackError> {
        let invalid = |reason: String| PackError::InvalidDefinition {
            type_name: type_name.to_string(),
            reason,
        };

        if self.pattern.is_none()
            && self.one_of.is_none()
            && self.range.is_none()
            && self.length.is_none()
        {
            return Err(invalid("no constraint given".to_string()));
        }

        let pattern = self
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .map_err(|e| invalid(format!("bad pattern: {e}")))?;

        if let Some(range) = &self.range {
            if range.min.is_some_and(|n| !n.is_finite())
                || range.max.is_some_and(|n| !n.is_finite())
            {
                return Err(invalid("range bounds must be finite".to_string()));
            }
            if range.is_inverted() {
                return Err(invalid("range min is greater than max".to_string()));
            }
        }
        if self.length.as_ref().is_some_and(Bounds::is_inverted) {
            return Err(invalid("length min is greater than max".to_string()));
        }

        let one_of = self.one_of.clone();
        let range = self.range;
        let length = self.length;

        Ok(Predicate::new(move |value| {
            if let Some(re) = &pattern {
                match value.to_primitive_string() {
                    Some(text) if re.is_match(&text) => {}
                    _ => return false,
                }
            }
            if let Some(literals) = &one_of {
                match value {
                    Value::String(s) if literals.contains(s) => {}
                    _ => return false,
                }
            }
            if let Some(range) = &range {
                match value.as_number() {
                    Some(n) if n.is_finite() && range.contains(n) => {}
                    _ => return false,
                }
            }
            if let Some(length) = &length {
                let len = match value {
                    Value::String(s) | Value::StringObject(s) => s.chars().count(),
                    Value::Array(items) => items.len(),
                    _ => return false,
                };
                if !length.contains(len) {
                    return false;
                }
            }
            true
        }))
    }
}

/// Register a declarative type under a bare name.
///
/// # Errors
///
/// [`RegistryError::InvalidArgument`] when the definition does not compile,
/// otherwise whatever [`TypeRegistry::register`] raises.
pub fn define(registry: &TypeRegistry, name: &str, def: &TypeDef) -> Result<(), RegistryError> {
    let predicate = def
        .compile(name)
        .map_err(|e| RegistryError::InvalidArgument(e.to_string()))?;
    registry.register(name, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(def: &TypeDef, value: impl Into<Value>) -> bool {
        def.compile("t").unwrap().test(&value.into())
    }

    #[test]
    fn test_pattern_matches_primitive_string_forms() {
        let email = TypeDef::pattern(r"^[^@]+@\w+\.\w+$");
        assert!(matches(&email, "me@example.com"));
        assert!(!matches(&email, "example.com"));
        assert!(!matches(&email, Value::array(["me@example.com"])));

        let digits = TypeDef::pattern(r"^\d+$");
        assert!(matches(&digits, 42));
        assert!(!matches(&digits, 4.5));
        assert!(matches(&digits, Value::StringObject("7".into())));
    }

    #[test]
    fn test_one_of_requires_string_primitive() {
        let grade = TypeDef::one_of(["A", "B"]);
        assert!(matches(&grade, "A"));
        assert!(!matches(&grade, "C"));
        assert!(!matches(&grade, Value::Null));
    }

    #[test]
    fn test_range_is_inclusive() {
        let percent = TypeDef::range(Some(0.0), Some(100.0));
        assert!(matches(&percent, 0));
        assert!(matches(&percent, 100));
        assert!(!matches(&percent, 100.5));
        assert!(!matches(&percent, "50"));
        assert!(!matches(&percent, f64::NAN));

        let positive = TypeDef::range(Some(0.0), None);
        assert!(matches(&positive, 1e300));
    }

    #[test]
    fn test_length_counts_chars_and_elements() {
        let short = TypeDef::length(None, Some(3));
        assert!(matches(&short, "héé"));
        assert!(!matches(&short, "abcd"));
        assert!(matches(&short, Value::array([1, 2, 3])));
        assert!(!matches(&short, 123));
    }

    #[test]
    fn test_constraints_combine() {
        let def = TypeDef {
            pattern: Some("^[a-z]+$".to_string()),
            length: Some(Bounds {
                min: Some(2),
                max: Some(4),
            }),
            ..TypeDef::default()
        };
        assert!(matches(&def, "abc"));
        assert!(!matches(&def, "a"));
        assert!(!matches(&def, "ABC"));
    }

    #[test]
    fn test_invalid_definitions() {
        for def in [
            TypeDef::default(),
            TypeDef::pattern("("),
            TypeDef::range(Some(5.0), Some(1.0)),
            TypeDef::range(Some(f64::NEG_INFINITY), None),
            TypeDef::length(Some(4), Some(2)),
        ] {
            let err = def.compile("bad").unwrap_err();
            assert!(
                matches!(err, PackError::InvalidDefinition { ref type_name, .. } if type_name == "bad"),
                "unexpected error: {err}"
            );
        }
    }

    #[test]
    fn test_define_maps_to_invalid_argument() {
        let registry = TypeRegistry::new();
        let err = define(&registry, "bad", &TypeDef::pattern("[")).unwrap_err();
        assert!(matches!(err, RegistryError::InvalidArgument(_)));
        assert!(!registry.contains("bad"));

        define(&registry, "zip", &TypeDef::pattern(r"^\d{5}$")).unwrap();
        assert!(registry.is_type(&Value::from("12345"), "zip").unwrap());
    }
}
