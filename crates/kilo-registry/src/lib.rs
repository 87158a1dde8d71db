//! # kilo-registry — Predicate Registry & Classifier
//!
//! Maps type names to predicates and answers membership queries against
//! that mapping.
//!
//! - [`TypeRegistry`] owns the name→predicate store. It is seeded with the
//!   [`builtins`] and grows through [`TypeRegistry::use_predicate`] and
//!   [`TypeRegistry::pack`]. Entries are never removed.
//! - [`TypeRegistry::of`] returns every registered name a value satisfies,
//!   as a [`Classification`].
//! - [`TypeRegistry::is`] checks a value against one name or any of
//!   several ([`TypeSpec`]).
//!
//! ## Crate Policy
//!
//! - Depends only on `kilo-core` internally.
//! - No global registry. Construct one per process (or per test) and pass
//!   the handle around; clones share the same store.

pub mod builtins;
pub mod classify;
pub mod predicate;
pub mod registry;

pub use builtins::BUILTIN_TYPES;
pub use classify::{Classification, TypeSpec};
pub use kilo_core::RegistryError;
pub use predicate::Predicate;
pub use registry::{Pack, PackReport, TypeRegistry};
