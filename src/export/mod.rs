//! Export module for rangebar
//!
//! Serialises range models and reports for other tools:
//! - JSON: machine-readable, one document per invocation
//! - YAML: human-readable, with a header comment

use serde::Serialize;
use std::io::Write;

use crate::error::{RangeError, RangeResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned wrapper around an exported value
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a, T: Serialize> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    /// The exported value
    pub data: &'a T,
}

impl<'a, T: Serialize> ExportDocument<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            data,
        }
    }
}

/// Write a value as pretty-printed JSON
pub fn export_json<T: Serialize, W: Write>(value: &T, writer: &mut W) -> RangeResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ExportDocument::new(value))
        .map_err(|e| RangeError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| RangeError::Export(e.to_string()))?;
    Ok(())
}

/// Write a value as YAML
pub fn export_yaml<T: Serialize, W: Write>(value: &T, writer: &mut W) -> RangeResult<()> {
    writeln!(writer, "# rangebar export").map_err(|e| RangeError::Export(e.to_string()))?;
    serde_yaml::to_writer(&mut *writer, &ExportDocument::new(value))
        .map_err(|e| RangeError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{samples_from_cents, Money};
    use crate::range::{build_standard_range_model, RangeInput};

    fn model() -> crate::range::StandardRangeModel {
        let samples = samples_from_cents(&[280000, 510000]);
        build_standard_range_model(&RangeInput::new(Money::from_cents(548000), &samples, 2))
    }

    #[test]
    fn test_export_json() {
        let mut buffer = Vec::new();
        export_json(&model(), &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["data"]["above_delta"], 38000);
        assert_eq!(value["data"]["is_above_high"], true);
        assert_eq!(value["data"]["current_pct"], 100.0);
        assert!(value["data"]["zero_pct"].is_null());
    }

    #[test]
    fn test_export_yaml() {
        let mut buffer = Vec::new();
        export_yaml(&model(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("# rangebar export"));
        assert!(text.contains("above_delta: 38000"));
        assert!(text.contains("zero_pct: null"));
    }
}
