//! # Shape Subcommand
//!
//! Validates a document against a schema file.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use kilo_registry::TypeRegistry;
use kilo_schema::Schema;

use crate::input::ValueArgs;

/// Arguments for `kilo shape`.
#[derive(Args, Debug)]
pub struct ShapeArgs {
    /// Schema file (YAML or JSON).
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,

    #[command(flatten)]
    pub value: ValueArgs,
}

/// Print `true` or `false`.
pub fn run_shape(
    args: &ShapeArgs,
    registry: &TypeRegistry,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    let schema = Schema::load(&args.schema)?;
    let value = args.value.read()?;
    let answer = kilo_schema::shape(registry, &value, &schema)?;
    writeln!(out, "{answer}")?;
    Ok(answer)
}
