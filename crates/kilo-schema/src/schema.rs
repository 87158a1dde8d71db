//! # Schema Model
//!
//! A [`Schema`] maps field names to [`FieldSpec`]s and keeps the order the
//! fields were written in; validation visits them in that order.
//!
//! ## Field Specs
//!
//! - `type` is required: a single type name or a list meaning "any of".
//! - `required` defaults to `false` and must be a boolean when present.
//! - Other keys are ignored.
//!
//! In YAML the type name `null` must be quoted (`type: 'null'`); bare
//! `null` is the YAML null value and is rejected as a type.
//!
//! Type names are not checked against a registry here. A schema can be
//! built before the packs it refers to are installed; unknown names
//! surface when a required field is validated.

use std::path::Path;

use indexmap::IndexMap;
use kilo_registry::TypeSpec;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Constraint for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Type (or any-of types) the field's value must satisfy.
    #[serde(rename = "type")]
    pub type_spec: TypeSpec,
    /// Whether the field is checked at all.
    #[serde(default)]
    pub required: bool,
}

impl FieldSpec {
    /// A required field.
    pub fn required(type_spec: impl Into<TypeSpec>) -> Self {
        Self {
            type_spec: type_spec.into(),
            required: true,
        }
    }

    /// An optional field.
    pub fn optional(type_spec: impl Into<TypeSpec>) -> Self {
        Self {
            type_spec: type_spec.into(),
            required: false,
        }
    }
}

/// Ordered field-name → [`FieldSpec`] map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    fields: IndexMap<String, FieldSpec>,
}

impl Schema {
    /// A schema with no fields; every value satisfies it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a field.
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Add a required field.
    pub fn required(self, name: impl Into<String>, type_spec: impl Into<TypeSpec>) -> Self {
        self.field(name, FieldSpec::required(type_spec))
    }

    /// Add an optional field.
    pub fn optional(self, name: impl Into<String>, type_spec: impl Into<TypeSpec>) -> Self {
        self.field(name, FieldSpec::optional(type_spec))
    }

    /// Fields in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldSpec)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up a field.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.get(name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Parse a YAML schema.
    pub fn from_yaml_str(source: &str) -> Result<Self, SchemaError> {
        serde_yaml::from_str(source).map_err(|e| SchemaError::InvalidSchema(e.to_string()))
    }

    /// Parse a JSON schema.
    pub fn from_json_str(source: &str) -> Result<Self, SchemaError> {
        serde_json::from_str(source).map_err(|e| SchemaError::InvalidSchema(e.to_string()))
    }

    /// Load a schema from disk, YAML for `.yaml`/`.yml` and JSON otherwise.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        Ok(kilo_core::document::parse_file(path)?)
    }
}
