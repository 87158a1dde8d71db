//! # kilo CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;
use kilo_cli::classify::{run_is, run_of, run_types, IsArgs, OfArgs};
use kilo_cli::registry::{build_registry, RegistryArgs};
use kilo_cli::shape::{run_shape, ShapeArgs};

/// kilo: runtime type tagging and shape validation.
///
/// Classifies JSON values against a registry of named types, extensible
/// with pack manifests, and validates documents against flat schemas.
#[derive(Parser, Debug)]
#[command(name = "kilo", version, about)]
struct Cli {
    #[command(flatten)]
    registry: RegistryArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print every type a value satisfies.
    Of(OfArgs),
    /// Test a value against one or more types.
    Is(IsArgs),
    /// Validate a document against a schema.
    Shape(ShapeArgs),
    /// List registered types.
    Types,
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let registry = build_registry(&cli.registry)?;
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Of(args) => run_of(&args, &registry, &mut out),
        Commands::Is(args) => run_is(&args, &registry, &mut out),
        Commands::Shape(args) => run_shape(&args, &registry, &mut out),
        Commands::Types => run_types(&registry, &mut out),
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
