//! # Document Loading
//!
//! Every file kilo reads (pack manifests, schemas, documents to validate)
//! is YAML when its extension is `.yaml` or `.yml` and JSON otherwise.
//!
//! Typed files go through [`parse_file`]. Documents that become a
//! [`Value`] go through [`load_value`], which keeps YAML's non-finite
//! floats (`.inf`, `-.inf`, `.nan`) as numbers.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::value::Value;

/// Source format of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML 1.2.
    Yaml,
    /// JSON.
    Json,
}

impl Format {
    /// The format implied by `path`'s extension.
    pub fn of_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Format::Yaml,
            _ => Format::Json,
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| load_error(path, format!("cannot read file: {e}")))
}

fn load_error(path: &Path, reason: String) -> LoadError {
    LoadError {
        path: path.display().to_string(),
        reason,
    }
}

/// Read `path` and deserialize it, choosing the format by extension.
pub fn parse_file<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let content = read(path)?;
    match Format::of_path(path) {
        Format::Yaml => serde_yaml::from_str(&content)
            .map_err(|e| load_error(path, format!("invalid YAML: {e}"))),
        Format::Json => serde_json::from_str(&content)
            .map_err(|e| load_error(path, format!("invalid JSON: {e}"))),
    }
}

/// Read `path` into a [`Value`], choosing the format by extension.
pub fn load_value(path: &Path) -> Result<Value, LoadError> {
    match Format::of_path(path) {
        Format::Yaml => {
            let yaml: serde_yaml::Value = parse_file(path)?;
            Value::try_from(yaml).map_err(|reason| load_error(path, reason))
        }
        Format::Json => {
            let json: serde_json::Value = parse_file(path)?;
            Ok(Value::from(json))
        }
    }
}
