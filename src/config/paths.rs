//! Path management for rangebar
//!
//! ## Path Resolution Order
//!
//! 1. `RANGEBAR_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/rangebar` or `~/.config/rangebar`
//! 3. Windows: `%APPDATA%\rangebar`

use std::path::PathBuf;

use crate::error::RangeError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "RANGEBAR_DATA_DIR";

/// Manages all paths used by rangebar
#[derive(Debug, Clone)]
pub struct RangebarPaths {
    base_dir: PathBuf,
}

impl RangebarPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, RangeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create RangebarPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/rangebar/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), RangeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| RangeError::Io(format!("Failed to create base directory: {}", e)))
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, RangeError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| RangeError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("rangebar"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, RangeError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| RangeError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("rangebar"))
}
