//! CLI command definitions and argument parsing.

use crate::config::{EngineKind, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Byline - Measure how accurately an extraction engine finds article authors.
#[derive(Debug, Parser)]
#[command(name = "byline")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BYLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Profile to use
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Log per-entry outcomes (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Four-line text report (default)
    Text,
    /// JSON object
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate the active engine against a comparison corpus
    Run(RunArgs),

    /// Manage engine profiles
    Profile(ProfileArgs),
}

/// Arguments for the run command.
#[derive(Debug, Parser)]
pub struct RunArgs {
    /// JSON corpus mapping URLs to their fixture file and authors
    #[arg(long)]
    pub corpus: PathBuf,

    /// Directory fixture files are resolved against
    #[arg(short = 'd', long)]
    pub fixtures: Option<PathBuf>,

    /// Number of entries evaluated at once
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Print a table of entries that did not match before the report
    #[arg(long)]
    pub show_failures: bool,
}

/// Arguments for profile management.
#[derive(Debug, Parser)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub action: ProfileAction,
}

/// Profile management actions.
#[derive(Debug, Subcommand)]
pub enum ProfileAction {
    /// List all profiles
    List,

    /// Show active profile
    Show,

    /// Switch to a different profile
    Switch {
        /// Profile name
        name: String,
    },

    /// Create or update a profile
    Set(ProfileSetArgs),

    /// Delete a profile
    Delete {
        /// Profile name
        name: String,
    },
}

/// Arguments for `profile set`.
#[derive(Debug, Parser)]
pub struct ProfileSetArgs {
    /// Profile name
    pub name: String,

    /// Engine kind
    #[arg(long, value_enum, default_value = "command")]
    pub kind: KindArg,

    /// Program to run (command engines)
    #[arg(long)]
    pub program: Option<String>,

    /// Argument passed to the program; `{url}` is replaced per entry
    #[arg(long = "arg", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Flag that disables fallback heuristics (empty for none)
    #[arg(long, allow_hyphen_values = true)]
    pub no_fallback_arg: Option<String>,

    /// Service endpoint (http engines)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Per-request timeout in seconds (http engines)
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Engine kind argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum KindArg {
    /// Local extractor process
    Command,
    /// Remote extraction service
    Http,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => OutputFormat::Text,
            CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl From<KindArg> for EngineKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Command => EngineKind::Command,
            KindArg::Http => EngineKind::Http,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command() {
        let cli = Cli::parse_from([
            "byline",
            "run",
            "--corpus",
            "comparison.json",
            "--workers",
            "4",
            "--show-failures",
        ]);
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.corpus, PathBuf::from("comparison.json"));
                assert_eq!(args.workers, Some(4));
                assert!(args.fixtures.is_none());
                assert!(args.show_failures);
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "byline",
            "run",
            "--corpus",
            "c.json",
            "--format",
            "json",
            "--profile",
            "svc",
            "-v",
        ]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.profile.as_deref(), Some("svc"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_run_requires_corpus() {
        assert!(Cli::try_parse_from(["byline", "run"]).is_err());
    }

    #[test]
    fn test_profile_set_command() {
        let cli = Cli::parse_from([
            "byline",
            "profile",
            "set",
            "local",
            "--program",
            "trafilatura",
            "--arg",
            "--json",
            "--arg",
            "--with-metadata",
            "--no-fallback-arg",
            "--fast",
        ]);
        match cli.command {
            Command::Profile(ProfileArgs {
                action: ProfileAction::Set(args),
            }) => {
                assert_eq!(args.name, "local");
                assert!(matches!(args.kind, KindArg::Command));
                assert_eq!(args.args, vec!["--json", "--with-metadata"]);
                assert_eq!(args.no_fallback_arg.as_deref(), Some("--fast"));
            }
            _ => panic!("Expected profile set command"),
        }
    }

    #[test]
    fn test_kind_conversion() {
        let kind: EngineKind = KindArg::Http.into();
        assert_eq!(kind, EngineKind::Http);
    }
}
