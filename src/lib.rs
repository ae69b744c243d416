//! php-bundle - Bundled PHP runtime installer
//!
//! Unpacks the PHP interpreter embedded in the legacy CLI wrapper into a
//! cache directory, once per payload version.

pub mod cli;
pub mod config;
pub mod error;
pub mod runtime;
pub mod ui;

pub use error::{BundleError, BundleResult};
pub use runtime::{runtime_executable_path, InstallOutcome, Installer};
