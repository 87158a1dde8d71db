//! # kilo-pack — Declarative Type Packs
//!
//! Packs are usually built in code with [`kilo_registry::Pack`]. This crate
//! adds a data form: a manifest naming the pack and describing each type
//! with declarative constraints, loadable from YAML or JSON.
//!
//! ```yaml
//! name: contact
//! types:
//!   email: { pattern: '^[^@]+@\w+\.\w+$' }
//!   grade: { one_of: [A, B, C] }
//!   percent: { range: { min: 0, max: 100 } }
//!   short: { length: { max: 8 } }
//! ```
//!
//! - [`definition`] — [`TypeDef`] and its compilation into a predicate.
//! - [`manifest`] — [`PackManifest`] parsing, loading, and installation.
//!
//! ## Crate Policy
//!
//! - Depends on `kilo-core` and `kilo-registry` internally.
//! - A manifest either compiles completely or not at all; an invalid entry
//!   never leaves a partially merged pack behind.

pub mod definition;
pub mod error;
pub mod manifest;

pub use definition::{define, Bounds, TypeDef};
pub use error::PackError;
pub use manifest::PackManifest;
