//! # Value Model
//!
//! [`Value`] is the dynamic value every predicate receives. It models the
//! JavaScript value universe closely enough that the built-in type names
//! (`string`, `object`, `regexp`, `promise`, ...) have a precise meaning:
//! each built-in corresponds to a `typeof` result, an
//! `Object.prototype.toString` tag, or a variant of this enum.
//!
//! Values parsed from JSON documents arrive through
//! `From<serde_json::Value>`; YAML documents through
//! `TryFrom<serde_yaml::Value>`, which keeps non-finite floats.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::number::to_js_string;

/// Ordered property map of a plain object.
pub type Object = IndexMap<String, Value>;

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `undefined` value; also what reading a missing field yields.
    Undefined,
    /// The `null` value.
    Null,
    /// A boolean primitive.
    Bool(bool),
    /// A number primitive, including NaN and the infinities.
    Number(f64),
    /// A string primitive.
    String(String),
    /// A boxed string (`new String("...")`).
    StringObject(String),
    /// A symbol with an optional description.
    Symbol(Option<String>),
    /// A function, identified by its name.
    Function(String),
    /// A plain object.
    Object(Object),
    /// An array.
    Array(Vec<Value>),
    /// A regular expression literal.
    RegExp {
        /// Pattern source without delimiters.
        source: String,
        /// Flag characters (`g`, `i`, ...).
        flags: String,
    },
    /// An error object.
    Error {
        /// Constructor name (`Error`, `TypeError`, ...).
        name: String,
        /// Error message.
        message: String,
    },
    /// A date.
    Date(DateTime<Utc>),
    /// A pending or settled promise.
    Promise,
    /// A `Map` with its entries in insertion order.
    Map(Vec<(Value, Value)>),
    /// A `Set` with its members in insertion order.
    Set(Vec<Value>),
}

impl Value {
    /// Build a plain object from `(key, value)` pairs, keeping their order.
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from anything convertible to values.
    pub fn array<V: Into<Value>, I: IntoIterator<Item = V>>(items: I) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// The result of the `typeof` operator for this value.
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::Null
            | Value::StringObject(_)
            | Value::Object(_)
            | Value::Array(_)
            | Value::RegExp { .. }
            | Value::Error { .. }
            | Value::Date(_)
            | Value::Promise
            | Value::Map(_)
            | Value::Set(_) => "object",
        }
    }

    /// The builtin tag `Object.prototype.toString` reports, e.g. `Array`
    /// for `[object Array]`.
    pub fn to_string_tag(&self) -> &'static str {
        match self {
            Value::Undefined => "Undefined",
            Value::Null => "Null",
            Value::Bool(_) => "Boolean",
            Value::Number(_) => "Number",
            Value::String(_) | Value::StringObject(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::Function(_) => "Function",
            Value::Object(_) => "Object",
            Value::Array(_) => "Array",
            Value::RegExp { .. } => "RegExp",
            Value::Error { .. } => "Error",
            Value::Date(_) => "Date",
            Value::Promise => "Promise",
            Value::Map(_) => "Map",
            Value::Set(_) => "Set",
        }
    }

    /// JavaScript truthiness.
    ///
    /// Falsy values are `undefined`, `null`, `false`, `0`, `-0`, `NaN` and
    /// the empty string. Every object, including an empty array and a boxed
    /// empty string, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => !(n.is_nan() || *n == 0.0),
            Value::String(s) => !s.is_empty(),
            _ => true,
        }
    }

    /// Read a property.
    ///
    /// Objects resolve by key; arrays resolve canonical decimal indices
    /// (`"0"`, `"12"`, not `"01"`). Arrays, strings and boxed strings also
    /// expose `length` (UTF-16 code units for strings). Every other value
    /// has no readable fields.
    pub fn field(&self, key: &str) -> Option<Cow<'_, Value>> {
        match self {
            Value::Object(map) => map.get(key).map(Cow::Borrowed),
            Value::Array(items) if key == "length" => {
                Some(Cow::Owned(Value::Number(items.len() as f64)))
            }
            Value::Array(items) => {
                let index: usize = key.parse().ok()?;
                if index.to_string() != key {
                    return None;
                }
                items.get(index).map(Cow::Borrowed)
            }
            Value::String(s) | Value::StringObject(s) if key == "length" => {
                Some(Cow::Owned(Value::Number(s.encode_utf16().count() as f64)))
            }
            _ => None,
        }
    }

    /// The string a primitive (or boxed string) converts to.
    ///
    /// Returns `None` for objects, whose conversion would go through
    /// user-visible `toString` methods.
    pub fn to_primitive_string(&self) -> Option<String> {
        match self {
            Value::Undefined => Some("undefined".to_string()),
            Value::Null => Some("null".to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(to_js_string(*n)),
            Value::String(s) | Value::StringObject(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// The contained number, if this is a number primitive.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The contained text of a string primitive or boxed string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::StringObject(s) => Some(s),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl TryFrom<serde_yaml::Value> for Value {
    type Error = String;

    fn try_from(yaml: serde_yaml::Value) -> Result<Self, String> {
        match yaml {
            serde_yaml::Value::Null => Ok(Value::Null),
            serde_yaml::Value::Bool(b) => Ok(Value::Bool(b)),
            serde_yaml::Value::Number(n) => Ok(Value::Number(yaml_number(&n))),
            serde_yaml::Value::String(s) => Ok(Value::String(s)),
            serde_yaml::Value::Sequence(seq) => seq
                .into_iter()
                .map(Value::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array),
            serde_yaml::Value::Mapping(map) => {
                let mut object = Object::with_capacity(map.len());
                for (k, v) in map {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => to_js_string(yaml_number(&n)),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        other => return Err(format!("unsupported YAML map key: {other:?}")),
                    };
                    object.insert(key, Value::try_from(v)?);
                }
                Ok(Value::Object(object))
            }
            // Tags carry no meaning here; take the tagged value.
            serde_yaml::Value::Tagged(tagged) => Value::try_from(tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> f64 {
    n.as_f64().unwrap_or(f64::NAN)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(map: Object) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_typeof_null_is_object() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Null.to_string_tag(), "Null");
    }

    #[test]
    fn test_boxed_string_tags() {
        let boxed = Value::StringObject("a".to_string());
        assert_eq!(boxed.type_of(), "object");
        assert_eq!(boxed.to_string_tag(), "String");
    }

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(-0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::from("0").is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::Array(vec![]).is_truthy());
        assert!(Value::object(Vec::<(String, Value)>::new()).is_truthy());
        assert!(Value::StringObject(String::new()).is_truthy());
    }

    #[test]
    fn test_field_lookup() {
        let obj = Value::object([("name", Value::from("kilo")), ("size", Value::from(3))]);
        assert_eq!(obj.field("name").as_deref(), Some(&Value::from("kilo")));
        assert_eq!(obj.field("missing"), None);
        assert_eq!(obj.field("length"), None);

        let arr = Value::array([10, 20]);
        assert_eq!(arr.field("1").as_deref(), Some(&Value::from(20)));
        assert_eq!(arr.field("01"), None);
        assert_eq!(arr.field("2"), None);

        assert_eq!(Value::from("abc").field("0"), None);
        assert_eq!(Value::Null.field("x"), None);
    }

    #[test]
    fn test_length_field() {
        assert_eq!(
            Value::array([1, 2]).field("length").as_deref(),
            Some(&Value::from(2))
        );
        assert_eq!(
            Value::Array(vec![]).field("length").as_deref(),
            Some(&Value::from(0))
        );
        assert_eq!(
            Value::from("abc").field("length").as_deref(),
            Some(&Value::from(3))
        );
        // One astral character is two UTF-16 code units.
        assert_eq!(
            Value::StringObject("\u{1F600}".to_string()).field("length").as_deref(),
            Some(&Value::from(2))
        );
        assert_eq!(Value::from(5).field("length"), None);
    }

    #[test]
    fn test_from_yaml_keeps_non_finite_numbers_and_order() {
        let yaml: serde_yaml::Value =
            serde_yaml::from_str("b: .inf\na: [1, -.inf]\n2: x\ntrue: y\n").unwrap();
        let value = Value::try_from(yaml).unwrap();
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "2", "true"]);
        assert_eq!(map["b"], Value::Number(f64::INFINITY));
        assert_eq!(
            map["a"],
            Value::array([Value::from(1), Value::Number(f64::NEG_INFINITY)])
        );
    }

    #[test]
    fn test_from_yaml_rejects_composite_keys() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("? [1, 2]\n: x\n").unwrap();
        assert!(Value::try_from(yaml).is_err());
    }

    #[test]
    fn test_from_json_preserves_key_order() {
        let value = Value::from(json!({"z": 1, "a": [true, null], "m": "s"}));
        let Value::Object(map) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(map["a"], Value::array([Value::Bool(true), Value::Null]));
    }

    #[test]
    fn test_primitive_string_conversion() {
        assert_eq!(Value::from(5).to_primitive_string().as_deref(), Some("5"));
        assert_eq!(Value::from(3.5).to_primitive_string().as_deref(), Some("3.5"));
        assert_eq!(Value::Null.to_primitive_string().as_deref(), Some("null"));
        assert_eq!(Value::Array(vec![]).to_primitive_string(), None);
    }
}
