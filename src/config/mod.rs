//! Configuration management for php-bundle

pub mod schema;

pub use schema::Config;

use crate::error::{BundleError, BundleResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory name under the platform config and cache dirs
const APP_DIR: &str = "php-bundle";

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join("config.toml")
    }

    /// Get the default cache directory, if the platform has one
    pub fn default_cache_dir() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(APP_DIR))
    }

    /// Load configuration, using defaults if the file does not exist
    pub fn load(&self) -> BundleResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(&self, path: &Path) -> BundleResult<Config> {
        let content = fs::read_to_string(path)
            .map_err(|e| BundleError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| BundleError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Pick the cache directory: explicit override, then config, then platform default
    pub fn resolve_cache_dir(
        &self,
        config: &Config,
        explicit: Option<&Path>,
    ) -> BundleResult<PathBuf> {
        if let Some(dir) = explicit {
            debug!("Using cache dir from command line: {}", dir.display());
            return Ok(dir.to_path_buf());
        }

        if let Some(ref dir) = config.cache.dir {
            debug!("Using cache dir from config: {}", dir.display());
            return Ok(dir.clone());
        }

        Self::default_cache_dir().ok_or(BundleError::NoCacheDir)
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
