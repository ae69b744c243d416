//! Path command - print where the PHP executable lives

use crate::error::BundleResult;
use crate::runtime::runtime_executable_path;
use std::path::Path;

/// Execute the path command. Prints the path whether or not it is installed.
pub fn execute(cache_dir: &Path) -> BundleResult<()> {
    println!("{}", runtime_executable_path(cache_dir).display());
    Ok(())
}
