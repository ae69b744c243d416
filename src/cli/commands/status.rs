//! Status command - report installation state without changing it

use crate::cli::args::{OutputFormat, StatusArgs};
use crate::error::BundleResult;
use crate::runtime::{Installer, MarkerState};
use crate::ui::{self, UiContext};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Snapshot of the runtime under one cache directory
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub cache_dir: PathBuf,
    pub destination: PathBuf,
    pub executable: PathBuf,
    pub executable_exists: bool,
    pub marker: MarkerState,
    pub expected_hash: String,
    pub archive_bytes: usize,
    pub payload_ok: bool,
}

impl StatusReport {
    /// Collect the report for `cache_dir`
    pub fn collect(installer: &Installer, cache_dir: &Path) -> BundleResult<Self> {
        let executable = installer.executable_path(cache_dir);
        let payload = installer.payload();

        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
            destination: installer.destination(cache_dir),
            executable_exists: executable.is_file(),
            executable,
            marker: installer.status(cache_dir)?,
            expected_hash: payload.hash.to_string(),
            archive_bytes: payload.archive_len(),
            payload_ok: payload.verify().is_ok(),
        })
    }
}

/// Execute the status command
pub fn execute(args: StatusArgs, installer: &Installer, cache_dir: &Path) -> BundleResult<()> {
    let report = StatusReport::collect(installer, cache_dir)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }

    Ok(())
}

fn print_table(report: &StatusReport) {
    let ctx = UiContext::detect();

    ui::intro(&ctx, "PHP Runtime Status");
    ui::key_value(&ctx, "Cache dir", &report.cache_dir.display().to_string());
    ui::key_value(&ctx, "Destination", &report.destination.display().to_string());
    ui::key_value_status(
        &ctx,
        "Executable",
        &report.executable.display().to_string(),
        report.executable_exists,
    );
    ui::key_value_status(&ctx, "Marker", &report.marker.to_string(), report.marker.is_current());
    ui::key_value(&ctx, "Expected hash", &report.expected_hash);
    ui::key_value_status(
        &ctx,
        "Embedded archive",
        &format!("{} bytes", report.archive_bytes),
        report.payload_ok,
    );

    match &report.marker {
        MarkerState::Current => {}
        MarkerState::Missing => {
            ui::step_warn_hint(&ctx, "PHP runtime not installed", "Run: php-bundle install")
        }
        MarkerState::Stale { found } => ui::step_warn_hint(
            &ctx,
            &format!("Installed runtime is from another build ({})", found.trim()),
            "Run: php-bundle install",
        ),
    }
}
