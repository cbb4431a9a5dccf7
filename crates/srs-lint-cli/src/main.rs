//! srs-lint CLI tool.
//!
//! Usage:
//! ```bash
//! srs-lint [OPTIONS] <SPEC_DIR>
//! srs-lint list-rules
//! srs-lint init [--force] [DIR]
//! ```

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Structural validator for modular SRS directories
#[derive(Parser)]
#[command(name = "srs-lint")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    check: CheckArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments of the default validation command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory holding the SRS markdown files
    #[arg(required = true)]
    pub spec_dir: Option<PathBuf>,

    /// Maximum lines per section file (overrides configuration)
    #[arg(long)]
    pub max_lines: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Report every warning as an error too
    #[arg(long)]
    pub strict: bool,

    /// Print requirement statistics after the report
    #[arg(long)]
    pub stats: bool,

    /// Exclude file name patterns (can be specified multiple times)
    #[arg(short, long)]
    pub exclude: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,

        /// Directory to write `srs-lint.toml` into (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

/// Output format for validation reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain `ERROR:`/`WARN:` report.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-finding compact format.
    Compact,
    /// Graphical diagnostics with source snippets.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => commands::check::run(&cli.check, cli.config.as_deref()),
        Some(Commands::ListRules) => {
            commands::list_rules::run();
            Ok(())
        }
        Some(Commands::Init { force, dir }) => commands::init::run(&dir, force),
    }
}
