//! # Pack Manifests
//!
//! A manifest is the serialized form of a pack: a name and an ordered map
//! of type keys to [`TypeDef`]s. Key order is preserved through parsing so
//! the registry sees the entries in the order the file lists them.

use std::path::Path;

use indexmap::IndexMap;
use kilo_registry::{Pack, PackReport, TypeRegistry};
use serde::{Deserialize, Serialize};

use crate::definition::TypeDef;
use crate::error::PackError;

/// Serialized description of a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackManifest {
    /// Namespace the types are registered under.
    pub name: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type key → definition, in file order.
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
}

impl PackManifest {
    /// Parse a YAML manifest.
    pub fn from_yaml_str(source: &str) -> Result<Self, PackError> {
        serde_yaml::from_str(source).map_err(|e| PackError::Load {
            path: "<yaml>".to_string(),
            reason: format!("invalid YAML: {e}"),
        })
    }

    /// Parse a JSON manifest.
    pub fn from_json_str(source: &str) -> Result<Self, PackError> {
        serde_json::from_str(source).map_err(|e| PackError::Load {
            path: "<json>".to_string(),
            reason: format!("invalid JSON: {e}"),
        })
    }

    /// Load a manifest from disk.
    ///
    /// `.yaml` and `.yml` files are parsed as YAML, anything else as JSON.
    ///
    /// # Errors
    ///
    /// [`PackError::Load`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, PackError> {
        let manifest = kilo_core::document::parse_file(path)?;
        tracing::debug!(path = %path.display(), "pack manifest loaded");
        Ok(manifest)
    }

    /// Compile every definition into a registry [`Pack`].
    ///
    /// # Errors
    ///
    /// The first [`PackError::InvalidDefinition`] in file order.
    pub fn compile(&self) -> Result<Pack, PackError> {
        self.types
            .iter()
            .try_fold(Pack::new(&self.name), |pack, (key, def)| {
                Ok(pack.with_predicate(key, def.compile(key)?))
            })
    }

    /// Compile and merge into `registry`.
    pub fn install(&self, registry: &TypeRegistry) -> Result<PackReport, PackError> {
        let pack = self.compile()?;
        let report = registry.pack(pack)?;
        if !report.skipped.is_empty() {
            tracing::info!(
                pack = %report.pack,
                skipped = ?report.skipped,
                "pack entries shadowed by existing types were not installed"
            );
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilo_core::Value;

    const CONTACT: &str = r#"
name: contact
description: Contact details.
types:
  email: { pattern: '^[^@]+@\w+\.\w+$' }
  grade: { one_of: [A, B, C] }
  percent: { range: { min: 0, max: 100 } }
  string: { length: { max: 8 } }
"#;

    #[test]
    fn test_yaml_manifest_preserves_order() {
        let manifest = PackManifest::from_yaml_str(CONTACT).unwrap();
        assert_eq!(manifest.name, "contact");
        let keys: Vec<&str> = manifest.types.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["email", "grade", "percent", "string"]);
        assert_eq!(manifest.types["percent"], TypeDef::range(Some(0.0), Some(100.0)));
    }

    #[test]
    fn test_install_qualifies_and_skips_bare_collisions() {
        let registry = TypeRegistry::new();
        let report = PackManifest::from_yaml_str(CONTACT)
            .unwrap()
            .install(&registry)
            .unwrap();
        assert_eq!(
            report.registered,
            vec!["contact.email", "contact.grade", "contact.percent"]
        );
        assert_eq!(report.skipped, vec!["string"]);
        assert!(registry
            .is_type(&Value::from("me@example.com"), "contact.email")
            .unwrap());
        assert!(!registry.contains("email"));
    }

    #[test]
    fn test_json_manifest() {
        let manifest = PackManifest::from_json_str(
            r#"{"name": "geo", "types": {"lat": {"range": {"min": -90, "max": 90}}}}"#,
        )
        .unwrap();
        let pack = manifest.compile().unwrap();
        assert_eq!(pack.name(), "geo");
        assert_eq!(pack.keys().collect::<Vec<_>>(), vec!["lat"]);
    }

    #[test]
    fn test_invalid_entry_fails_whole_manifest() {
        let registry = TypeRegistry::new();
        let manifest = PackManifest::from_yaml_str(
            "name: broken\ntypes:\n  ok: { pattern: 'a' }\n  bad: { pattern: '(' }\n",
        )
        .unwrap();
        let err = manifest.install(&registry).unwrap_err();
        assert!(matches!(err, PackError::InvalidDefinition { .. }));
        assert!(!registry.contains("broken.ok"));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = PackManifest::from_yaml_str("name: x\ntypes:\n  t: { regex: 'a' }\n").unwrap_err();
        assert!(matches!(err, PackError::Load { .. }));
    }

    #[test]
    fn test_sealed_registry_surfaces_registry_error() {
        let registry = TypeRegistry::new();
        registry.seal();
        let err = PackManifest::from_yaml_str(CONTACT)
            .unwrap()
            .install(&registry)
            .unwrap_err();
        assert!(matches!(err, PackError::Registry(_)));
    }
}
