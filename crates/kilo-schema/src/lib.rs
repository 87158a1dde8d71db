//! # kilo-schema — Shape Validation
//!
//! Checks object values against flat schemas of the form
//!
//! ```yaml
//! name:  { type: string, required: true }
//! age:   { type: [int, number] }
//! email: { type: contact.email, required: true }
//! ```
//!
//! ## Schema Model (`schema`)
//!
//! [`Schema`] is an ordered map of field name to [`FieldSpec`]. Schemas
//! deserialize from YAML or JSON, or are built in code.
//!
//! ## Validation (`validate`)
//!
//! [`shape`] walks the schema in order and fails on the first required
//! field that is absent, falsy, or not of the declared type. Optional
//! fields are never inspected. The result is a plain boolean; there is no
//! per-field report.
//!
//! ## Crate Policy
//!
//! - Depends on `kilo-core` and `kilo-registry` internally.
//! - Schemas are read-only inputs; nothing here stores them.

pub mod error;
pub mod schema;
pub mod validate;

pub use error::SchemaError;
pub use schema::{FieldSpec, Schema};
pub use validate::{load_document, shape};
