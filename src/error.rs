//! Error types for php-bundle
//!
//! All modules use `BundleResult<T>` as their return type.

use crate::runtime::template::TemplateError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for php-bundle operations
pub type BundleResult<T> = Result<T, BundleError>;

/// All errors that can occur while installing or inspecting the bundled runtime
#[derive(Error, Debug)]
pub enum BundleError {
    // Marker errors
    #[error("Failed to read install marker {path}: {source}")]
    MarkerRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write install marker {path}: {source}")]
    MarkerWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Archive errors
    #[error("Could not open embedded archive: {0}")]
    ArchiveOpen(#[source] zip::result::ZipError),

    #[error("Could not open archive entry {name}: {source}")]
    ArchiveEntry {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Unexpected archive layout at {name}: {reason}")]
    ArchiveLayout { name: String, reason: String },

    #[error("Embedded archive digest mismatch: expected {expected}, got {actual}")]
    PayloadDigest { expected: String, actual: String },

    // Filesystem errors
    #[error("Could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Template errors
    #[error("Could not render php.ini: {0}")]
    Template(#[from] TemplateError),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("No cache directory available on this platform")]
    NoCacheDir,

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl BundleError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a directory creation error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create a file write error
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create an archive layout error
    pub fn layout(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ArchiveLayout {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ArchiveOpen(_) | Self::ArchiveLayout { .. } | Self::PayloadDigest { .. } => {
                Some("The embedded PHP archive is damaged. Rebuild or reinstall this binary.")
            }
            Self::MarkerRead { .. } | Self::MarkerWrite { .. } => {
                Some("Check permissions on the cache directory, or run: php-bundle clean")
            }
            Self::NoCacheDir => Some("Pass --cache-dir or set cache.dir in the config file"),
            _ => None,
        }
    }
}
