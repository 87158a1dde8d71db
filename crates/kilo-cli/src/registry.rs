//! # Registry Setup
//!
//! Builds the registry every subcommand runs against.

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use kilo_pack::PackManifest;
use kilo_registry::TypeRegistry;

/// Flags shared by all subcommands.
#[derive(Args, Debug, Default)]
pub struct RegistryArgs {
    /// Pack manifest (YAML or JSON) to install; repeatable.
    #[arg(long = "pack", value_name = "FILE", global = true)]
    pub packs: Vec<PathBuf>,

    /// Seal the registry once packs are installed.
    #[arg(long, global = true)]
    pub seal: bool,
}

/// A registry with the built-ins plus every requested pack.
pub fn build_registry(args: &RegistryArgs) -> anyhow::Result<TypeRegistry> {
    let registry = TypeRegistry::new();
    for path in &args.packs {
        let manifest = PackManifest::load(path)?;
        let report = manifest
            .install(&registry)
            .with_context(|| format!("installing pack from {}", path.display()))?;
        tracing::info!(
            pack = %report.pack,
            registered = report.registered.len(),
            skipped = report.skipped.len(),
            "pack installed"
        );
    }
    if args.seal {
        registry.seal();
    }
    Ok(registry)
}
