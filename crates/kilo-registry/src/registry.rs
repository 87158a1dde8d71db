//! # Type Registry
//!
//! The name→predicate store behind every query.
//!
//! ## Semantics
//!
//! - Names are unique. Registering an existing name replaces its predicate
//!   in place; the name keeps its original position in the iteration order.
//! - Entries are never removed.
//! - [`TypeRegistry::pack`] inserts `"{pack}.{key}"` for each pack entry
//!   whose bare `key` is not already registered, and skips the rest.
//! - After [`TypeRegistry::seal`], every registration fails with
//!   [`RegistryError::Sealed`].
//!
//! ## Thread Safety
//!
//! The store sits behind a `parking_lot::RwLock`. Queries take the read
//! lock only long enough to clone the predicates they need and evaluate
//! them unlocked, so a predicate may itself query the registry.

use std::sync::Arc;

use indexmap::IndexMap;
use kilo_core::{RegistryError, Value};
use parking_lot::RwLock;

use crate::builtins::{builtins, BUILTIN_TYPES};
use crate::predicate::Predicate;

#[derive(Debug, Default)]
struct RegistryState {
    types: IndexMap<String, Predicate>,
    sealed: bool,
}

/// Shared handle to a name→predicate registry.
///
/// Clones share the same store: a type registered through one handle is
/// visible through every other.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl TypeRegistry {
    /// A registry seeded with the built-in types.
    pub fn new() -> Self {
        let types = builtins()
            .into_iter()
            .map(|(name, predicate)| (name.to_string(), predicate))
            .collect();
        Self {
            state: Arc::new(RwLock::new(RegistryState {
                types,
                sealed: false,
            })),
        }
    }

    /// A registry with no types at all.
    pub fn empty() -> Self {
        Self {
            state: Arc::new(RwLock::new(RegistryState::default())),
        }
    }

    /// Register (or replace) a type from a closure.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Sealed`] if the registry is sealed.
    pub fn use_predicate<F>(&self, name: impl Into<String>, f: F) -> Result<(), RegistryError>
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.register(name, Predicate::new(f))
    }

    /// Register (or replace) a type from an existing [`Predicate`].
    ///
    /// Any string is a valid name, including the empty string.
    pub fn register(
        &self,
        name: impl Into<String>,
        predicate: Predicate,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        let mut state = self.state.write();
        if state.sealed {
            return Err(RegistryError::Sealed(name));
        }
        if state.types.insert(name.clone(), predicate).is_some() {
            if BUILTIN_TYPES.contains(&name.as_str()) {
                tracing::warn!(type_name = %name, "built-in type overwritten");
            } else {
                tracing::debug!(type_name = %name, "type replaced");
            }
        } else {
            tracing::debug!(type_name = %name, "type registered");
        }
        Ok(())
    }

    /// Merge a pack under its namespace.
    ///
    /// Each entry is written to `"{pack}.{key}"` unless the bare `key` is
    /// already registered, in which case it is skipped. Skips are reported,
    /// not raised. Names and keys are taken verbatim, so an empty key in
    /// pack `p` is written as `"p."`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Sealed`] if the registry is sealed.
    pub fn pack(&self, pack: Pack) -> Result<PackReport, RegistryError> {
        let Pack { name, types } = pack;
        let mut state = self.state.write();
        if state.sealed {
            return Err(RegistryError::Sealed(name));
        }

        let mut report = PackReport {
            pack: name.clone(),
            registered: Vec::new(),
            skipped: Vec::new(),
        };
        for (key, predicate) in types {
            if state.types.contains_key(&key) {
                tracing::debug!(pack = %name, type_name = %key, "pack entry skipped: bare name already registered");
                report.skipped.push(key);
                continue;
            }
            let qualified = format!("{name}.{key}");
            state.types.insert(qualified.clone(), predicate);
            report.registered.push(qualified);
        }

        tracing::debug!(
            pack = %name,
            registered = report.registered.len(),
            skipped = report.skipped.len(),
            "pack merged"
        );
        Ok(report)
    }

    /// Reject all further registrations.
    pub fn seal(&self) {
        let mut state = self.state.write();
        if !state.sealed {
            state.sealed = true;
            tracing::debug!(types = state.types.len(), "registry sealed");
        }
    }

    /// Whether [`seal`](Self::seal) has been called.
    pub fn is_sealed(&self) -> bool {
        self.state.read().sealed
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.state.read().types.contains_key(name)
    }

    /// The predicate registered under `name`.
    pub fn predicate(&self, name: &str) -> Option<Predicate> {
        self.state.read().types.get(name).cloned()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.state.read().types.keys().cloned().collect()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.state.read().types.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `(name, predicate)` pair in registration order, detached from
    /// the lock.
    pub(crate) fn snapshot(&self) -> Vec<(String, Predicate)> {
        self.state
            .read()
            .types
            .iter()
            .map(|(name, predicate)| (name.clone(), predicate.clone()))
            .collect()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A named bundle of predicates merged into a registry as a unit.
#[derive(Debug, Clone)]
pub struct Pack {
    name: String,
    types: IndexMap<String, Predicate>,
}

impl Pack {
    /// An empty pack.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: IndexMap::new(),
        }
    }

    /// Add an entry from a closure.
    pub fn with_type<F>(self, key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with_predicate(key, Predicate::new(f))
    }

    /// Add an entry from an existing [`Predicate`].
    pub fn with_predicate(mut self, key: impl Into<String>, predicate: Predicate) -> Self {
        self.types.insert(key.into(), predicate);
        self
    }

    /// The namespace entries are registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry keys, unqualified, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the pack has no entries.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Outcome of merging a [`Pack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackReport {
    /// The pack's name.
    pub pack: String,
    /// Qualified names that were written.
    pub registered: Vec<String>,
    /// Unqualified keys that were skipped because the bare name existed.
    pub skipped: Vec<String>,
}
