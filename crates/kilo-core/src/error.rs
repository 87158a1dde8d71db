//! # Error Types
//!
//! The registry error taxonomy and the file-loading error. Downstream
//! crates wrap [`RegistryError`] in their own `thiserror` enums with
//! `#[from]` and fold [`LoadError`] into their `Load` variants.

use thiserror::Error;

/// Errors raised by registry mutation and membership queries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A registration was attempted with an unusable name or predicate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A membership query named a type that is not registered.
    #[error("unknown type '{0}'")]
    UnknownType(String),

    /// The registry was sealed and no longer accepts registrations.
    #[error("registry is sealed; cannot register '{0}'")]
    Sealed(String),
}

/// A YAML or JSON file could not be read or parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot load '{path}': {reason}")]
pub struct LoadError {
    /// Path of the file.
    pub path: String,
    /// Reason the file could not be loaded.
    pub reason: String,
}
