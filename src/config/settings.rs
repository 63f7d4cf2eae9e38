//! User settings for childshare
//!
//! Manages display and report preferences. Every field has a default so an
//! older or partial settings file still loads.

use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::paths::ChildsharePaths;
use crate::error::ChildshareError;

/// User settings for childshare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of periods compared against the same number of preceding periods
    #[serde(default = "default_trend_window")]
    pub trend_window: usize,

    /// How many top categories the summary highlights
    #[serde(default = "default_top")]
    pub default_top: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_trend_window() -> usize {
    1
}

fn default_top() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            trend_window: default_trend_window(),
            default_top: default_top(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or default settings if the file doesn't exist
    ///
    /// Defaults are not written back; call [`Settings::save`] to persist.
    /// Hand-edited values that the setters would reject are reset to their
    /// defaults with a warning.
    pub fn load_or_create(paths: &ChildsharePaths) -> Result<Self, ChildshareError> {
        let path = paths.settings_file();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file; using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ChildshareError::Io(format!(
                    "Failed to read settings {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let mut settings: Self = serde_json::from_str(&contents).map_err(|e| {
            ChildshareError::Config(format!("Settings file {} is not valid: {}", path.display(), e))
        })?;
        settings.repair();

        debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    fn repair(&mut self) {
        if self.trend_window == 0 {
            warn!("Settings trend_window is 0; using {}", default_trend_window());
            self.trend_window = default_trend_window();
        }
        if self.currency_symbol.trim().is_empty() {
            warn!("Settings currency_symbol is blank; using {}", default_currency());
            self.currency_symbol = default_currency();
        }
    }

    /// Save settings to disk
    ///
    /// Writes `config.json.tmp` beside the settings file and renames it into
    /// place, so an interrupted save leaves the previous settings intact.
    pub fn save(&self, paths: &ChildsharePaths) -> Result<(), ChildshareError> {
        paths.ensure_directories()?;
        let path = paths.settings_file();
        let staging = path.with_extension("json.tmp");

        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');

        fs::write(&staging, json).map_err(|e| {
            ChildshareError::Io(format!("Failed to write {}: {}", staging.display(), e))
        })?;
        fs::rename(&staging, &path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            ChildshareError::Io(format!("Failed to replace {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Set the trend window, rejecting zero
    pub fn set_trend_window(&mut self, window: usize) -> Result<(), ChildshareError> {
        if window == 0 {
            return Err(ChildshareError::Validation(
                "Trend window must be at least 1 period".into(),
            ));
        }
        self.trend_window = window;
        Ok(())
    }

    /// Set the currency symbol, rejecting blanks
    pub fn set_currency_symbol(&mut self, symbol: &str) -> Result<(), ChildshareError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ChildshareError::Validation(
                "Currency symbol cannot be empty".into(),
            ));
        }
        self.currency_symbol = symbol.to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.trend_window, 1);
        assert_eq!(settings.default_top, 3);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.set_currency_symbol("€").unwrap();
        settings.set_trend_window(3).unwrap();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.trend_window, 3);
    }

    #[test]
    fn test_save_leaves_no_staging_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().join("nested"));

        Settings::default().save(&paths).unwrap();
        assert!(paths.is_initialized());
        assert!(!paths.settings_file().with_extension("json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::write(paths.settings_file(), "not json at all").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ChildshareError::Config(_)));
    }

    #[test]
    fn test_hand_edited_invalid_values_are_repaired() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ChildsharePaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::write(
            paths.settings_file(),
            r#"{"trend_window": 0, "currency_symbol": "  ", "default_top": 4}"#,
        )
        .unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.trend_window, 1);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.default_top, 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"currency_symbol": "£"}"#).unwrap();
        assert_eq!(settings.currency_symbol, "£");
        assert_eq!(settings.trend_window, 1);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_validation() {
        let mut settings = Settings::default();
        assert!(settings.set_trend_window(0).unwrap_err().is_validation());
        assert!(settings.set_currency_symbol("  ").unwrap_err().is_validation());
        assert_eq!(settings, Settings::default());
    }
}
