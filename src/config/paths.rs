//! Path management for childshare
//!
//! ## Path Resolution Order
//!
//! 1. `CHILDSHARE_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/childshare` on Linux, `~/Library/Application Support/childshare`
//!    on macOS, `%APPDATA%\childshare\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ChildshareError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CHILDSHARE_DATA_DIR";

/// Manages all paths used by childshare
#[derive(Debug, Clone)]
pub struct ChildsharePaths {
    base_dir: PathBuf,
}

impl ChildsharePaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ChildshareError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ChildshareError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ChildshareError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ChildshareError> {
    ProjectDirs::from("", "", "childshare")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ChildshareError::Config("Could not determine a home directory".into()))
}
