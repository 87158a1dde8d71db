//! # Classification Subcommands
//!
//! `of`, `is`, and `types`.

use std::io::Write;

use clap::Args;
use kilo_registry::{TypeRegistry, TypeSpec};

use crate::input::ValueArgs;

/// Arguments for `kilo of`.
#[derive(Args, Debug)]
pub struct OfArgs {
    #[command(flatten)]
    pub value: ValueArgs,
}

/// Arguments for `kilo is`.
#[derive(Args, Debug)]
pub struct IsArgs {
    /// Type to test; repeat `--type` to accept any of several.
    #[arg(long = "type", short = 't', value_name = "TYPE", required = true)]
    pub types: Vec<String>,

    #[command(flatten)]
    pub value: ValueArgs,
}

/// Print the classification as JSON: a bare string for a single match,
/// a list otherwise.
pub fn run_of(args: &OfArgs, registry: &TypeRegistry, out: &mut impl Write) -> anyhow::Result<bool> {
    let value = args.value.read()?;
    let classification = registry.of(&value);
    writeln!(out, "{}", serde_json::to_string(&classification)?)?;
    Ok(!classification.is_empty())
}

/// Print `true` or `false`.
pub fn run_is(args: &IsArgs, registry: &TypeRegistry, out: &mut impl Write) -> anyhow::Result<bool> {
    let value = args.value.read()?;
    let spec = match args.types.as_slice() {
        [single] => TypeSpec::One(single.clone()),
        several => TypeSpec::AnyOf(several.to_vec()),
    };
    let answer = registry.is(&value, &spec)?;
    writeln!(out, "{answer}")?;
    Ok(answer)
}

/// Print registered type names, one per line, in registration order.
pub fn run_types(registry: &TypeRegistry, out: &mut impl Write) -> anyhow::Result<bool> {
    for name in registry.names() {
        writeln!(out, "{name}")?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(literal: &str) -> ValueArgs {
        ValueArgs {
            value: Some(literal.to_string()),
            input: None,
        }
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<bool>) -> (bool, String) {
        let mut buf = Vec::new();
        let ok = f(&mut buf).unwrap();
        (ok, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_of_prints_single_name_or_list() {
        let registry = TypeRegistry::new();
        let (ok, text) = output(|out| run_of(&OfArgs { value: value("[1, 2]") }, &registry, out));
        assert!(ok);
        assert_eq!(text, "\"array\"\n");

        let (_, text) = output(|out| run_of(&OfArgs { value: value("42") }, &registry, out));
        assert_eq!(text, "[\"number\",\"int\"]\n");
    }

    #[test]
    fn test_is_single_and_any_of() {
        let registry = TypeRegistry::new();
        let args = IsArgs {
            types: vec!["number".to_string()],
            value: value("5"),
        };
        let (ok, text) = output(|out| run_is(&args, &registry, out));
        assert!(ok);
        assert_eq!(text, "true\n");

        let args = IsArgs {
            types: vec!["string".to_string(), "null".to_string()],
            value: value("5"),
        };
        let (ok, text) = output(|out| run_is(&args, &registry, out));
        assert!(!ok);
        assert_eq!(text, "false\n");
    }

    #[test]
    fn test_is_unknown_type_errors() {
        let registry = TypeRegistry::new();
        let args = IsArgs {
            types: vec!["email".to_string()],
            value: value("\"a@b.c\""),
        };
        let mut buf = Vec::new();
        let err = run_is(&args, &registry, &mut buf).unwrap_err();
        assert!(err.to_string().contains("unknown type 'email'"));
    }

    #[test]
    fn test_types_lists_builtins() {
        let registry = TypeRegistry::new();
        let (_, text) = output(|out| run_types(&registry, out));
        assert_eq!(text.lines().next(), Some("string"));
        assert_eq!(text.lines().count(), kilo_registry::BUILTIN_TYPES.len());
    }
}
