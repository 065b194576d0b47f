//! Lectern CLI - lecture-notes page registry.
//!
//! Provides commands for:
//! - `check`: Load every course and verify sources against page content
//! - `list`: Print each course's pages in source order
//! - `resolve`: Resolve a path name or identifier
//! - `manifest`: Write the resolved page manifest as JSON

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, ListArgs, ManifestArgs, ResolveArgs};
use output::Output;

/// Lectern - lecture-notes page registry.
#[derive(Parser)]
#[command(name = "lectern", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover lectern.toml).
    #[arg(short, long, global = true, env = "LECTERN_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output (registry loading and summary logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify every course's sources and page directories.
    Check(CheckArgs),
    /// List pages in source order.
    List(ListArgs),
    /// Resolve a path name or named identifier.
    Resolve(ResolveArgs),
    /// Write the resolved page manifest.
    Manifest(ManifestArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Check(args) => args.execute(config),
        Commands::List(args) => args.execute(config),
        Commands::Resolve(args) => args.execute(config),
        Commands::Manifest(args) => args.execute(config),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// --verbose enables INFO level, otherwise use `RUST_LOG` or default to WARN.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lectern", "list", "--verbose", "-c", "site/lectern.toml"])
            .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("site/lectern.toml")));
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_resolve_requires_exactly_one_key() {
        let neither = Cli::try_parse_from(["lectern", "resolve", "--course", "cs-162"]);
        assert!(neither.is_err());

        let both = Cli::try_parse_from([
            "lectern", "resolve", "--course", "cs-162", "--path", "generics", "--id", "generics",
        ]);
        assert!(both.is_err());

        let one = Cli::try_parse_from(["lectern", "resolve", "--course", "cs-162", "--id", "x"]);
        assert!(one.is_ok());
    }

    #[test]
    fn test_log_filter_levels() {
        assert_eq!(log_filter(true).to_string(), "info");

        // SAFETY: no other test reads or writes RUST_LOG
        unsafe {
            std::env::remove_var("RUST_LOG");
        }
        assert_eq!(log_filter(false).to_string(), "warn");
    }
}
