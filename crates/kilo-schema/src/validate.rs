//! # Shape Validation
//!
//! `shape(registry, value, schema)` is true when, for every required field
//! in schema order, the value's field is present, truthy, and satisfies the
//! field's type. The first failing field ends validation.
//!
//! ## Rules Worth Knowing
//!
//! - Truthiness is JavaScript's: a required field holding `0`, `""`,
//!   `false` or `null` fails even when the declared type would accept it.
//! - Optional fields are skipped entirely, mistyped or not.
//! - Fields are read with [`Value::field`]: object keys, array indices, and
//!   `length` on arrays and strings. Any other value has no fields, so it
//!   satisfies a schema only when the schema has no required fields.
//! - An unregistered type name on a required field is an error, not a
//!   `false`, and only surfaces if validation reaches that field.

use std::path::Path;

use kilo_core::Value;
use kilo_registry::TypeRegistry;

use crate::error::SchemaError;
use crate::schema::Schema;

/// Whether `value` satisfies `schema`.
///
/// # Errors
///
/// [`SchemaError::Registry`] if a required field reached during validation
/// names an unregistered type.
pub fn shape(registry: &TypeRegistry, value: &Value, schema: &Schema) -> Result<bool, SchemaError> {
    for (name, spec) in schema.fields() {
        if !spec.required {
            continue;
        }

        let Some(field) = value.field(name).filter(|v| v.is_truthy()) else {
            tracing::debug!(field = %name, "required field missing or falsy");
            return Ok(false);
        };

        if !registry.is(&field, &spec.type_spec)? {
            tracing::debug!(field = %name, expected = ?spec.type_spec, "required field has wrong type");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Load a document to validate, YAML for `.yaml`/`.yml` and JSON otherwise.
pub fn load_document(path: &Path) -> Result<Value, SchemaError> {
    Ok(kilo_core::document::load_value(path)?)
}
