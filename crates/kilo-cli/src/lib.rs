//! # kilo-cli — Command-Line Interface
//!
//! Thin clap front end over the library crates.
//!
//! ## Subcommands
//!
//! - `of` — print every type a JSON value satisfies
//! - `is` — test a JSON value against one type or any of several
//! - `shape` — validate a document against a schema file
//! - `types` — list registered type names
//!
//! Global `--pack` flags install pack manifests before the subcommand
//! runs; `--seal` seals the registry afterwards.
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from behavior: every subcommand has an
//!   `Args` struct and a `run` function writing to a caller-supplied sink.
//! - `run` returns `Ok(false)` for a negative answer; the binary maps that
//!   to exit code 1. Errors map to exit code 2.

pub mod classify;
pub mod input;
pub mod registry;
pub mod shape;
