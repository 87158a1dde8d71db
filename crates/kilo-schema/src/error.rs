//! # Schema Errors

use kilo_core::{LoadError, RegistryError};
use thiserror::Error;

/// Error while building a schema or validating against it.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The schema source is structurally wrong (missing `type`, non-boolean
    /// `required`, not a map).
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// A schema or document file could not be read or parsed.
    #[error("load error for '{path}': {reason}")]
    Load {
        /// Path of the file.
        path: String,
        /// Reason the file could not be loaded.
        reason: String,
    },

    /// A required field names a type the registry does not know.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl From<LoadError> for SchemaError {
    fn from(LoadError { path, reason }: LoadError) -> Self {
        SchemaError::Load { path, reason }
    }
}
