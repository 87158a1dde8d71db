//! # Value Input
//!
//! Values come either inline as a JSON literal or from a JSON/YAML file.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Args;
use kilo_core::Value;

/// Where to read the value from.
#[derive(Args, Debug, Default)]
pub struct ValueArgs {
    /// JSON literal, e.g. '[1, 2]' or '"text"'.
    #[arg(value_name = "JSON")]
    pub value: Option<String>,

    /// Read the value from a JSON or YAML file instead.
    #[arg(long, value_name = "FILE", conflicts_with = "value")]
    pub input: Option<PathBuf>,
}

impl ValueArgs {
    /// Parse the selected input.
    pub fn read(&self) -> anyhow::Result<Value> {
        match (&self.value, &self.input) {
            (Some(literal), _) => parse_literal(literal),
            (None, Some(path)) => read_file(path),
            (None, None) => bail!("a JSON value or --input FILE is required"),
        }
    }
}

/// Parse an inline JSON literal.
pub fn parse_literal(literal: &str) -> anyhow::Result<Value> {
    let json: serde_json::Value =
        serde_json::from_str(literal).with_context(|| format!("invalid JSON value: {literal}"))?;
    Ok(Value::from(json))
}

fn read_file(path: &Path) -> anyhow::Result<Value> {
    Ok(kilo_schema::load_document(path)?)
}
