//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Sets up local embeddings for Memorai: checks Python, installs
/// sentence-transformers, and downloads the embedding model.
#[derive(Debug, Parser)]
#[command(name = "setup-local-ai")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides .memorai/setup.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory to run in (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Python interpreter to use
    #[arg(long, global = true, env = "PYTHON_PATH")]
    pub python: Option<String>,

    /// Show verbose output, including pip and probe output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full setup (default if no command specified)
    Run(RunArgs),

    /// Check the Python version only
    Check,

    /// Download and test the embedding model without installing packages
    Probe(ProbeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Package to install with pip
    #[arg(long)]
    pub package: Option<String>,

    /// Pretrained embedding model to download
    #[arg(short, long)]
    pub model: Option<String>,

    /// Fail when the probe reports an error, even if it exits cleanly
    #[arg(long)]
    pub strict: bool,

    /// Skip the pip install step
    #[arg(long)]
    pub skip_install: bool,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Pretrained embedding model to download
    #[arg(short, long)]
    pub model: Option<String>,

    /// Fail when the probe reports an error, even if it exits cleanly
    #[arg(long)]
    pub strict: bool,

    /// Print the probe result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_defaults_to_none() {
        let cli = Cli::parse_from(["setup-local-ai"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn run_flags_parse() {
        let cli = Cli::parse_from([
            "setup-local-ai",
            "run",
            "--package",
            "sentence-transformers==3.0.1",
            "--model",
            "paraphrase-MiniLM-L3-v2",
            "--strict",
            "--skip-install",
        ]);
        match cli.command {
            Some(Commands::Run(args)) => {
                assert_eq!(args.package.as_deref(), Some("sentence-transformers==3.0.1"));
                assert_eq!(args.model.as_deref(), Some("paraphrase-MiniLM-L3-v2"));
                assert!(args.strict);
                assert!(args.skip_install);
            }
            other => panic!("Expected Run, got {other:?}"),
        }
    }

    #[test]
    fn global_python_flag_after_subcommand() {
        let cli = Cli::parse_from(["setup-local-ai", "check", "--python", "python3.12"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
        assert_eq!(cli.python.as_deref(), Some("python3.12"));
    }

    #[test]
    fn probe_json_flag_parses() {
        let cli = Cli::parse_from(["setup-local-ai", "probe", "--json"]);
        match cli.command {
            Some(Commands::Probe(args)) => assert!(args.json),
            other => panic!("Expected Probe, got {other:?}"),
        }
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["setup-local-ai", "--quiet", "--verbose"]);
        assert!(result.is_err());
    }
}
