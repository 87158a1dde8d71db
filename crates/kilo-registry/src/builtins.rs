//! # Built-in Types
//!
//! The sixteen predicates every [`TypeRegistry`](crate::TypeRegistry)
//! starts with, in registration order.
//!
//! | name | matches |
//! |------|---------|
//! | `string` | string primitives and boxed strings |
//! | `number` | finite numbers |
//! | `float` | finite numbers whose string form matches `^\d+\.\d+$` |
//! | `int` | finite numbers whose string form matches `^\d+[^.]$` |
//! | `boolean` | booleans |
//! | `symbol` | symbols |
//! | `function` | functions |
//! | `undefined` | `undefined` |
//! | `object` | plain objects only |
//! | `array` | arrays |
//! | `regexp` | regular expressions |
//! | `null` | `null` |
//! | `error` | error objects |
//! | `date` | dates |
//! | `promise` | promises |
//! | `iterable` | maps and sets |
//!
//! ## Number Patterns
//!
//! `float` and `int` match against [`to_js_string`], not against the
//! number itself. Consequences worth knowing:
//!
//! - `5` is not an `int`: the pattern needs at least two characters.
//! - `42` is an `int`, `3.14` is a `float`.
//! - Negative numbers are neither (the leading `-` is not a digit).
//! - `1e21` is neither (`1e+21`).

use std::sync::OnceLock;

use kilo_core::{to_js_string, Value};
use regex::Regex;

use crate::predicate::Predicate;

/// Names of the built-in types, in registration order.
pub const BUILTIN_TYPES: [&str; 16] = [
    "string",
    "number",
    "float",
    "int",
    "boolean",
    "symbol",
    "function",
    "undefined",
    "object",
    "array",
    "regexp",
    "null",
    "error",
    "date",
    "promise",
    "iterable",
];

static FLOAT_PATTERN: OnceLock<Regex> = OnceLock::new();
static INT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn float_pattern() -> &'static Regex {
    FLOAT_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+\.[0-9]+$").expect("valid float regex"))
}

fn int_pattern() -> &'static Regex {
    INT_PATTERN.get_or_init(|| Regex::new(r"^[0-9]+[^.]$").expect("valid int regex"))
}

fn finite_number(value: &Value) -> Option<f64> {
    value.as_number().filter(|n| n.is_finite())
}

fn number_matches(value: &Value, pattern: &Regex) -> bool {
    finite_number(value).is_some_and(|n| pattern.is_match(&to_js_string(n)))
}

/// Tagged object of the given `Object.prototype.toString` kind, excluding
/// arrays.
fn tagged_object(value: &Value, tag: &str) -> bool {
    value.type_of() == "object" && !matches!(value, Value::Array(_)) && value.to_string_tag() == tag
}

/// Look up the predicate for one built-in name.
pub fn builtin(name: &str) -> Option<Predicate> {
    let predicate = match name {
        "string" => Predicate::new(|v| matches!(v, Value::String(_) | Value::StringObject(_))),
        "number" => Predicate::new(|v| finite_number(v).is_some()),
        "float" => Predicate::new(|v| number_matches(v, float_pattern())),
        "int" => Predicate::new(|v| number_matches(v, int_pattern())),
        "boolean" => Predicate::new(|v| v.type_of() == "boolean"),
        "symbol" => Predicate::new(|v| v.type_of() == "symbol"),
        "function" => Predicate::new(|v| v.type_of() == "function"),
        "undefined" => Predicate::new(|v| v.type_of() == "undefined"),
        "object" => Predicate::new(|v| tagged_object(v, "Object")),
        "array" => Predicate::new(|v| matches!(v, Value::Array(_))),
        "regexp" => Predicate::new(|v| tagged_object(v, "RegExp")),
        "null" => Predicate::new(|v| matches!(v, Value::Null)),
        "error" => Predicate::new(|v| matches!(v, Value::Error { .. })),
        "date" => Predicate::new(|v| matches!(v, Value::Date(_))),
        "promise" => Predicate::new(|v| matches!(v, Value::Promise)),
        "iterable" => Predicate::new(|v| matches!(v, Value::Map(_) | Value::Set(_))),
        _ => return None,
    };
    Some(predicate)
}

/// All built-in predicates, in registration order.
pub fn builtins() -> Vec<(&'static str, Predicate)> {
    BUILTIN_TYPES
        .iter()
        .filter_map(|name| builtin(name).map(|p| (*name, p)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, value: impl Into<Value>) -> bool {
        builtin(name).map(|p| p.test(&value.into())).unwrap_or(false)
    }

    #[test]
    fn test_number_patterns_compile() {
        assert_eq!(float_pattern().as_str(), r"^[0-9]+\.[0-9]+$");
        assert_eq!(int_pattern().as_str(), r"^[0-9]+[^.]$");
    }

    #[test]
    fn test_every_builtin_name_resolves() {
        assert_eq!(builtins().len(), BUILTIN_TYPES.len());
        assert!(builtin("email").is_none());
    }

    #[test]
    fn test_number_rejects_nan_and_infinity() {
        assert!(check("number", 5));
        assert!(check("number", -0.5));
        assert!(!check("number", f64::NAN));
        assert!(!check("number", f64::INFINITY));
        assert!(!check("number", "5"));
    }

    #[test]
    fn test_int_requires_two_characters() {
        assert!(!check("int", 5));
        assert!(!check("int", 0));
        assert!(check("int", 42));
        assert!(check("int", 100));
        assert!(!check("int", -42));
        assert!(!check("int", 3.14));
        assert!(!check("int", 12.5));
        assert!(!check("int", 1e21));
    }

    #[test]
    fn test_float_requires_digits_on_both_sides() {
        assert!(check("float", 3.14));
        assert!(check("float", 0.5));
        assert!(!check("float", -3.14));
        assert!(!check("float", 3.0));
        assert!(!check("float", 1e-7));
        assert!(!check("float", "3.14"));
    }

    #[test]
    fn test_object_excludes_tagged_objects() {
        assert!(check("object", Value::object([("a", 1)])));
        assert!(!check("object", Value::Null));
        assert!(!check("object", Value::array([1, 2])));
        assert!(!check("object", Value::StringObject("a".into())));
        assert!(!check(
            "object",
            Value::RegExp {
                source: "a+".into(),
                flags: String::new(),
            }
        ));
        assert!(!check("object", Value::Promise));
        assert!(!check("object", Value::Map(vec![])));
    }

    #[test]
    fn test_string_accepts_boxed_strings() {
        assert!(check("string", "abc"));
        assert!(check("string", Value::StringObject("abc".into())));
        assert!(!check("string", Value::Symbol(Some("abc".into()))));
    }

    #[test]
    fn test_iterable_is_maps_and_sets() {
        assert!(check("iterable", Value::Set(vec![Value::from(1)])));
        assert!(check("iterable", Value::Map(vec![])));
        assert!(!check("iterable", Value::array([1])));
        assert!(!check("iterable", "abc"));
        assert!(!check("iterable", Value::Null));
        assert!(!check("iterable", Value::Undefined));
    }
}
