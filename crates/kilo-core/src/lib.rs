//! # kilo-core — Foundational Types for kilo
//!
//! This crate is the leaf of the kilo workspace. It defines the value model
//! that every predicate classifies and the error taxonomy shared by the
//! registry, pack, and schema crates.
//!
//! ## Key Design Principles
//!
//! 1. **One dynamic value type.** [`Value`] is a tagged enum covering the
//!    JavaScript-style value universe the built-in predicates distinguish:
//!    primitives, plain objects, arrays, and the tagged object kinds
//!    (regexp, error, date, promise, map, set).
//!
//! 2. **Explicit number rendering.** Predicates that pattern-match numbers
//!    go through [`number::to_js_string`], never through `Display`, so the
//!    textual form is identical to ECMAScript `Number.prototype.toString`.
//!
//! 3. **Documents keep their numbers.** [`document::load_value`] converts
//!    YAML straight into [`Value`], so `.inf` and `.nan` arrive as numbers
//!    instead of being squeezed through JSON.
//!
//! 4. **Ordered objects.** Object fields keep insertion order, so anything
//!    iterating an object sees the order the caller wrote.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `kilo-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod document;
pub mod error;
pub mod number;
pub mod value;

pub use error::{LoadError, RegistryError};
pub use number::to_js_string;
pub use value::{Object, Value};
