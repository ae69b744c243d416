//! Clean command - remove the installed runtime

use crate::cli::args::CleanArgs;
use crate::error::BundleResult;
use crate::runtime::Installer;
use crate::ui::{self, UiContext};
use std::path::Path;

/// Execute the clean command
pub fn execute(args: CleanArgs, installer: &Installer, cache_dir: &Path) -> BundleResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);
    let destination = installer.destination(cache_dir);

    if !destination.exists() {
        println!("Nothing to remove at {}", destination.display());
        return Ok(());
    }

    let prompt = format!("Remove {}?", destination.display());
    if !ui::confirm(&ctx, &prompt, false)? {
        println!("Aborted.");
        return Ok(());
    }

    if installer.remove(cache_dir)? {
        ui::outro_success(&ctx, &format!("Removed {}", destination.display()));
    }

    Ok(())
}
