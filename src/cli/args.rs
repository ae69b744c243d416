//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// php-bundle - Bundled PHP runtime installer
///
/// Unpacks the PHP interpreter embedded in this binary into a cache
/// directory and reports where it lives.
#[derive(Parser, Debug)]
#[command(name = "php-bundle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PHP_BUNDLE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Cache directory holding the runtime (overrides config)
    #[arg(long, global = true, env = "PHP_BUNDLE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the bundled PHP runtime if it is missing or outdated
    Install(InstallArgs),

    /// Print the path of the PHP executable
    Path,

    /// Show installation state
    Status(StatusArgs),

    /// Remove the installed runtime
    Clean(CleanArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Reinstall even if the installed runtime is current
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the status command
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Skip confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Output format for status
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}
