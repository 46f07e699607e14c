//! CLI command handlers
//!
//! Bridges clap argument parsing with the range engine, storage and
//! display layers.

pub mod account;
pub mod overview;
pub mod range;

pub use account::{handle_account_command, AccountArgs};
pub use overview::{handle_overview_command, OverviewArgs};
pub use range::{handle_allowance_command, handle_standard_command, AllowanceArgs, StandardArgs};

use clap::ValueEnum;
use serde::Serialize;
use std::io::{self, Write};

use crate::config::{Settings, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
use crate::error::{RangeError, RangeResult};
use crate::export::{export_json, export_yaml};
use crate::models::MAX_DECIMAL_PLACES;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Rendered range bars
    #[default]
    Text,
    /// JSON document
    Json,
    /// YAML document
    Yaml,
}

/// Print a value in the requested format
///
/// `render_text` is only called for text output.
pub(crate) fn emit<T, F>(value: &T, format: OutputFormat, render_text: F) -> RangeResult<()>
where
    T: Serialize,
    F: FnOnce() -> String,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Text => {
            out.write_all(render_text().as_bytes())?;
            out.flush()?;
            Ok(())
        }
        OutputFormat::Json => export_json(value, &mut out),
        OutputFormat::Yaml => export_yaml(value, &mut out),
    }
}

/// Track width from the command line or settings
pub(crate) fn resolve_width(width: Option<usize>, settings: &Settings) -> RangeResult<usize> {
    let width = width.unwrap_or(settings.bar_width);
    if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&width) {
        return Err(RangeError::Validation(format!(
            "Bar width {} out of range ({}..={})",
            width, MIN_BAR_WIDTH, MAX_BAR_WIDTH
        )));
    }
    Ok(width)
}

/// Minor-unit exponent from the command line or settings
pub(crate) fn resolve_decimal_places(
    decimal_places: Option<u32>,
    settings: &Settings,
) -> RangeResult<u32> {
    let decimal_places = decimal_places.unwrap_or(settings.default_decimal_places);
    if decimal_places > MAX_DECIMAL_PLACES {
        return Err(RangeError::Validation(format!(
            "Decimal places {} out of range (max {})",
            decimal_places, MAX_DECIMAL_PLACES
        )));
    }
    Ok(decimal_places)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_decimal_places() {
        let settings = Settings::default();
        assert_eq!(resolve_decimal_places(None, &settings).unwrap(), 2);
        assert_eq!(resolve_decimal_places(Some(0), &settings).unwrap(), 0);
        assert_eq!(resolve_decimal_places(Some(18), &settings).unwrap(), 18);
        assert!(resolve_decimal_places(Some(19), &settings)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_resolve_width() {
        let settings = Settings::default();
        assert_eq!(resolve_width(None, &settings).unwrap(), 40);
        assert_eq!(resolve_width(Some(12), &settings).unwrap(), 12);
        assert!(resolve_width(Some(1), &settings).unwrap_err().is_validation());
        assert_eq!(resolve_width(Some(MAX_BAR_WIDTH), &settings).unwrap(), MAX_BAR_WIDTH);
        assert!(resolve_width(Some(MAX_BAR_WIDTH + 1), &settings)
            .unwrap_err()
            .is_validation());
        assert!(resolve_width(Some(usize::MAX), &settings)
            .unwrap_err()
            .is_validation());
    }
}
