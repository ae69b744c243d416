//! Install command - unpack the bundled runtime into the cache dir

use crate::cli::args::InstallArgs;
use crate::error::BundleResult;
use crate::runtime::{InstallOutcome, Installer};
use crate::ui::{self, TaskSpinner, UiContext};
use std::path::Path;

/// Execute the install command
pub fn execute(args: InstallArgs, installer: &Installer, cache_dir: &Path) -> BundleResult<()> {
    let ctx = UiContext::detect();
    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start("Installing PHP runtime...");

    let result = if args.force {
        installer.reinstall(cache_dir)
    } else {
        installer.ensure_installed(cache_dir)
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            spinner.stop_error("PHP runtime installation failed");
            return Err(e);
        }
    };

    let destination = installer.destination(cache_dir).display().to_string();
    match outcome {
        InstallOutcome::AlreadyInstalled => {
            spinner.stop("PHP runtime already installed");
        }
        InstallOutcome::Installed { files } => {
            spinner.stop("PHP runtime installed");
            ui::step_ok_detail(&ctx, &format!("Extracted {} files", files), &destination);
        }
    }

    ui::key_value(
        &ctx,
        "Executable",
        &installer.executable_path(cache_dir).display().to_string(),
    );

    Ok(())
}
