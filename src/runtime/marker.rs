//! Install marker handling
//!
//! The marker is a small text file holding the hash of the payload that was
//! last installed completely. It is written last, so its presence with the
//! expected value is the only signal that the destination tree is usable.

use crate::error::{BundleError, BundleResult};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// State of the install marker relative to an expected hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum MarkerState {
    /// No marker file exists
    Missing,
    /// Marker exists but records another payload
    Stale { found: String },
    /// Marker matches the expected hash
    Current,
}

impl MarkerState {
    /// Whether the destination tree can be used as-is
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }
}

impl fmt::Display for MarkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "missing"),
            Self::Stale { .. } => write!(f, "stale"),
            Self::Current => write!(f, "current"),
        }
    }
}

/// Read the marker at `path` and compare its bytes with `expected`
///
/// A missing file is not an error. Any other read failure is. Contents that
/// are not UTF-8 are a mismatch like any other.
pub fn read_state(path: &Path, expected: &str) -> BundleResult<MarkerState> {
    match fs::read(path) {
        Ok(found) if found == expected.as_bytes() => Ok(MarkerState::Current),
        Ok(found) => {
            let found = String::from_utf8_lossy(&found).into_owned();
            debug!("Marker {} holds {:?}, expected {}", path.display(), found, expected);
            Ok(MarkerState::Stale { found })
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(MarkerState::Missing),
        Err(e) => Err(BundleError::MarkerRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Write `hash` to the marker at `path`, creating parent directories
pub fn save_hash(path: &Path, hash: &str) -> BundleResult<()> {
    let write_err = |e| BundleError::MarkerWrite {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, hash).map_err(write_err)
}

/// Delete the marker, treating a missing file as success
pub fn clear(path: &Path) -> BundleResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(BundleError::MarkerWrite {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
