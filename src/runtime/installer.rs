//! Hash-gated installation of the bundled PHP runtime
//!
//! Layout produced under a cache directory `D`:
//!
//! | Path | Content |
//! |------|---------|
//! | `D/php/...` | Archive contents, root folder stripped |
//! | `D/php/php.ini` | Rendered from the template with `PSHDir = D` |
//! | `D/php/extras/cacert.pem` | CA bundle, mode 0644 |
//! | `D/php/hash` | Marker, written last |

use crate::error::{BundleError, BundleResult};
use crate::runtime::archive;
use crate::runtime::marker::{self, MarkerState};
use crate::runtime::payload::Payload;
use crate::runtime::template::Template;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Directory under the cache dir that holds the runtime
pub const RUNTIME_DIR: &str = "php";

/// Interpreter executable inside the runtime directory
pub const PHP_EXECUTABLE: &str = "php.exe";

/// Marker file name
pub const MARKER_FILE: &str = "hash";

/// Template parameter bound to the cache directory
pub const CACHE_DIR_PARAM: &str = "PSHDir";

const INI_FILE: &str = "php.ini";
const CA_CERT_FILE: &str = "cacert.pem";
const EXTRAS_DIR: &str = "extras";

/// Path of the PHP executable for a cache directory. Does not touch the disk.
pub fn runtime_executable_path(cache_dir: &Path) -> PathBuf {
    cache_dir.join(RUNTIME_DIR).join(PHP_EXECUTABLE)
}

/// Result of [`Installer::ensure_installed`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Marker matched; nothing was written
    AlreadyInstalled,
    /// Archive was extracted and the marker written
    Installed {
        /// Number of archive files written
        files: usize,
    },
}

impl InstallOutcome {
    /// Whether this call extracted the archive
    pub fn extracted(&self) -> bool {
        matches!(self, Self::Installed { .. })
    }
}

/// Installs a [`Payload`] into cache directories
#[derive(Debug, Clone, Copy)]
pub struct Installer {
    payload: Payload,
}

impl Installer {
    /// Installer for the given payload
    pub fn new(payload: Payload) -> Self {
        Self { payload }
    }

    /// Installer for the payload embedded in this binary
    pub fn bundled() -> Self {
        Self::new(Payload::bundled())
    }

    /// The payload this installer writes
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Runtime directory for a cache directory
    pub fn destination(&self, cache_dir: &Path) -> PathBuf {
        cache_dir.join(RUNTIME_DIR)
    }

    /// Path of the PHP executable for a cache directory
    pub fn executable_path(&self, cache_dir: &Path) -> PathBuf {
        runtime_executable_path(cache_dir)
    }

    fn marker_path(&self, cache_dir: &Path) -> PathBuf {
        self.destination(cache_dir).join(MARKER_FILE)
    }

    /// Marker state without installing anything
    pub fn status(&self, cache_dir: &Path) -> BundleResult<MarkerState> {
        marker::read_state(&self.marker_path(cache_dir), self.payload.hash)
    }

    /// Make sure the runtime under `cache_dir` matches this payload
    ///
    /// Does nothing when the marker already holds the expected hash. Otherwise
    /// extracts the archive, renders `php.ini`, writes the CA bundle and
    /// finally the marker. Stops at the first error; files written before it
    /// stay on disk and the next call starts over.
    pub fn ensure_installed(&self, cache_dir: &Path) -> BundleResult<InstallOutcome> {
        let dest = self.destination(cache_dir);

        match self.status(cache_dir)? {
            MarkerState::Current => {
                debug!("PHP runtime at {} is current", dest.display());
                return Ok(InstallOutcome::AlreadyInstalled);
            }
            MarkerState::Stale { found } => {
                warn!("PHP runtime at {} is outdated ({}), reinstalling", dest.display(), found)
            }
            MarkerState::Missing => {}
        }

        info!("Installing PHP runtime into {}", dest.display());

        fs::create_dir_all(&dest).map_err(|e| BundleError::create_dir(&dest, e))?;
        let files = archive::extract(self.payload.archive, &dest)?;

        self.write_ini(cache_dir, &dest)?;
        self.write_ca_cert(&dest)?;

        marker::save_hash(&self.marker_path(cache_dir), self.payload.hash)?;

        info!("Installed PHP runtime ({} files)", files);
        Ok(InstallOutcome::Installed { files })
    }

    /// Drop the marker and install again
    pub fn reinstall(&self, cache_dir: &Path) -> BundleResult<InstallOutcome> {
        marker::clear(&self.marker_path(cache_dir))?;
        self.ensure_installed(cache_dir)
    }

    /// Delete the runtime directory. Returns whether anything was removed.
    pub fn remove(&self, cache_dir: &Path) -> BundleResult<bool> {
        let dest = self.destination(cache_dir);
        if !dest.exists() {
            return Ok(false);
        }

        // Marker first: a half-deleted tree must never look installed
        marker::clear(&self.marker_path(cache_dir))?;

        match fs::remove_dir_all(&dest) {
            Ok(()) => {
                info!("Removed {}", dest.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(BundleError::io(format!("removing {}", dest.display()), e)),
        }
    }

    fn write_ini(&self, cache_dir: &Path, dest: &Path) -> BundleResult<()> {
        let template = Template::parse(INI_FILE, self.payload.ini_template)?;

        let mut values = HashMap::new();
        values.insert(CACHE_DIR_PARAM, cache_dir.display().to_string());
        let rendered = template.render(&values)?;

        let path = dest.join(INI_FILE);
        fs::write(&path, rendered).map_err(|e| BundleError::write_file(&path, e))
    }

    fn write_ca_cert(&self, dest: &Path) -> BundleResult<()> {
        let extras = dest.join(EXTRAS_DIR);
        fs::create_dir_all(&extras).map_err(|e| BundleError::create_dir(&extras, e))?;

        let path = extras.join(CA_CERT_FILE);
        fs::write(&path, self.payload.ca_cert).map_err(|e| BundleError::write_file(&path, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o644))
                .map_err(|e| BundleError::write_file(&path, e))?;
        }

        Ok(())
    }
}
