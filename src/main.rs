//! php-bundle - Bundled PHP runtime installer
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use php_bundle::cli::{Cli, Commands};
use php_bundle::config::{Config, ConfigManager};
use php_bundle::error::BundleResult;
use php_bundle::runtime::Installer;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> BundleResult<()> {
    let cli = Cli::parse();

    // Load configuration before logging so log_format can apply
    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load()?;

    init_logging(cli.verbose, &config);
    debug!("Config path: {}", config_manager.path().display());

    let cache_dir = config_manager.resolve_cache_dir(&config, cli.cache_dir.as_deref())?;
    debug!("Cache dir: {}", cache_dir.display());

    let installer = Installer::bundled();

    match cli.command {
        Commands::Install(args) => {
            php_bundle::cli::commands::install(args, &installer, &cache_dir)
        }
        Commands::Path => php_bundle::cli::commands::path(&cache_dir),
        Commands::Status(args) => php_bundle::cli::commands::status(args, &installer, &cache_dir),
        Commands::Clean(args) => php_bundle::cli::commands::clean(args, &installer, &cache_dir),
    }
}

/// 0 = warn, 1 = info, 2+ = debug. Logs go to stderr so `path` output stays clean.
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("php_bundle=warn"),
        1 => EnvFilter::new("php_bundle=info"),
        _ => EnvFilter::new("php_bundle=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}
