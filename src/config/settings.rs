//! User settings for rangebar
//!
//! Defaults used when an input does not say otherwise: the currency minor-unit
//! exponent, the symbol printed in front of amounts, the width of rendered
//! bars and the default log filter.

use serde::{Deserialize, Serialize};

use super::paths::RangebarPaths;
use crate::error::RangeError;
use crate::models::MAX_DECIMAL_PLACES;

/// Narrowest track a range bar can be drawn on
pub const MIN_BAR_WIDTH: usize = 2;
/// Widest track a range bar can be drawn on
pub const MAX_BAR_WIDTH: usize = 500;

/// User settings for rangebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Minor-unit exponent used when no currency is given
    #[serde(default = "default_decimal_places")]
    pub default_decimal_places: u32,

    /// Currency symbol used when no currency is given
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Track width of rendered range bars, in characters
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Default tracing filter directive (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_decimal_places() -> u32 {
    2
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_bar_width() -> usize {
    40
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_decimal_places: default_decimal_places(),
            currency_symbol: default_currency(),
            bar_width: default_bar_width(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &RangebarPaths) -> Result<Self, RangeError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| RangeError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| RangeError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &RangebarPaths) -> Result<(), RangeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| RangeError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| RangeError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject settings the range engine cannot honor
    pub fn validate(&self) -> Result<(), RangeError> {
        if self.default_decimal_places > MAX_DECIMAL_PLACES {
            return Err(RangeError::Config(format!(
                "default_decimal_places {} exceeds {}",
                self.default_decimal_places, MAX_DECIMAL_PLACES
            )));
        }
        if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&self.bar_width) {
            return Err(RangeError::Config(format!(
                "bar_width must be between {} and {}, got {}",
                MIN_BAR_WIDTH, MAX_BAR_WIDTH, self.bar_width
            )));
        }
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
        assert_eq!(settings.default_decimal_places, 2);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.bar_width, 40);
        assert_eq!(settings.log_level, "warn");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RangebarPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RangebarPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_decimal_places: 3,
            currency_symbol: "KD".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_decimal_places, 3);
        assert_eq!(loaded.currency_symbol, "KD");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RangebarPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"bar_width": 20}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.bar_width, 20);
        assert_eq!(loaded.default_decimal_places, 2);
    }

    #[test]
    fn test_invalid_decimal_places_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RangebarPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"default_decimal_places": 25}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RangeError::Config(_)));
    }

    #[test]
    fn test_oversized_bar_width_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = RangebarPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.settings_file(),
            r#"{"bar_width": 18446744073709551615}"#,
        )
        .unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, RangeError::Config(_)));

        let settings = Settings {
            bar_width: MAX_BAR_WIDTH,
            ..Settings::default()
        };
        assert!(settings.validate().is_ok());
    }
}
