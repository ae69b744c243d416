//! Confirmation prompt with non-interactive fallback

use super::context::UiContext;
use crate::error::{BundleError, BundleResult};

/// Ask a yes/no question
///
/// Returns `true` without asking in auto-yes mode, and `default` when there
/// is no terminal to ask on.
pub fn confirm(ctx: &UiContext, message: &str, default: bool) -> BundleResult<bool> {
    if ctx.auto_yes() {
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    cliclack::confirm(message)
        .initial_value(default)
        .interact()
        .map_err(|e| BundleError::User(format!("Prompt failed: {}", e)))
}
