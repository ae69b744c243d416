//! Bundled PHP runtime installation
//!
//! Extracts the embedded PHP for Windows archive into `<cache>/php` on first
//! use and records the payload hash so later runs skip the work.
//!
//! # Install Protocol
//!
//! | Marker | Action |
//! |--------|--------|
//! | Missing | Full install |
//! | Stale (other hash) | Full install, overwriting files |
//! | Current | Nothing |
//!
//! The marker is written only after the archive, `php.ini` and the CA bundle
//! are all in place. A failed install leaves no marker, so the next call
//! retries from scratch. Calls against the same cache directory are not
//! synchronized; callers serialize them.

pub mod archive;
pub mod installer;
pub mod marker;
pub mod payload;
pub mod template;

pub use installer::{runtime_executable_path, InstallOutcome, Installer, PHP_EXECUTABLE};
pub use marker::MarkerState;
pub use payload::Payload;
pub use template::{Template, TemplateError};
