//! # Pack Errors

use kilo_core::{LoadError, RegistryError};
use thiserror::Error;

/// Error while loading, compiling, or installing a pack.
#[derive(Error, Debug)]
pub enum PackError {
    /// A type definition cannot be turned into a predicate.
    #[error("invalid definition for type '{type_name}': {reason}")]
    InvalidDefinition {
        /// Unqualified type key.
        type_name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The manifest file could not be read or parsed.
    #[error("pack load error for '{path}': {reason}")]
    Load {
        /// Path of the manifest.
        path: String,
        /// Reason the manifest could not be loaded.
        reason: String,
    },

    /// The registry refused the pack.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl From<LoadError> for PackError {
    fn from(LoadError { path, reason }: LoadError) -> Self {
        PackError::Load { path, reason }
    }
}
