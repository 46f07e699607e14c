//! Balance history loading
//!
//! History files are either JSON (an array of `{"date": ..., "balance": ...}`
//! objects, date optional) or CSV with a `date,balance` header. Balances are
//! integer minor units; rows are expected oldest first.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use super::file_io::read_json_required;
use crate::error::{RangeError, RangeResult};
use crate::models::{BalanceSample, Money};

/// Date format accepted in CSV history
pub const CSV_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    date: Option<String>,
    balance: i64,
}

/// Load balance history, choosing the parser from the file extension
pub fn load_history<P: AsRef<Path>>(path: P) -> RangeResult<Vec<BalanceSample>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    let samples = match extension.as_deref() {
        Some("csv") => {
            let file = std::fs::File::open(path).map_err(|e| {
                RangeError::Storage(format!("Failed to open {}: {}", path.display(), e))
            })?;
            parse_history_csv(file)?
        }
        Some("json") => read_json_required(path)?,
        _ => {
            return Err(RangeError::Validation(format!(
                "Unsupported history file '{}': expected .json or .csv",
                path.display()
            )))
        }
    };

    info!(path = %path.display(), samples = samples.len(), "loaded balance history");
    Ok(samples)
}

/// Parse `date,balance` CSV rows into samples
///
/// An empty date cell yields an undated sample.
pub fn parse_history_csv<R: Read>(reader: R) -> RangeResult<Vec<BalanceSample>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut samples = Vec::new();
    for (index, record) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = record?;
        let date = match row.date.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(NaiveDate::parse_from_str(raw, CSV_DATE_FORMAT).map_err(|e| {
                RangeError::Csv(format!("Row {}: invalid date '{}': {}", index + 1, raw, e))
            })?),
        };
        samples.push(BalanceSample {
            date,
            balance: Money::from_cents(row.balance),
        });
    }

    debug!(rows = samples.len(), "parsed CSV history");
    Ok(samples)
}

/// Parse a comma-separated list of minor-unit balances ("280000,510000")
pub fn parse_balance_list(list: &str) -> RangeResult<Vec<BalanceSample>> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<i64>()
                .map(|cents| BalanceSample::new(Money::from_cents(cents)))
                .map_err(|_| {
                    RangeError::Validation(format!("Invalid balance '{}': expected integer minor units", item))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_csv() {
        let data = "date,balance\n2025-01-01,280000\n2025-01-02, 510000\n,-100\n";
        let samples = parse_history_csv(data.as_bytes()).unwrap();

        assert_eq!(samples.len(), 3);
        assert_eq!(
            samples[0].date,
            Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert_eq!(samples[1].balance.cents(), 510000);
        assert_eq!(samples[2].date, None);
        assert_eq!(samples[2].balance.cents(), -100);
    }

    #[test]
    fn test_parse_csv_bad_date() {
        let data = "date,balance\n01/02/2025,100\n";
        let err = parse_history_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, RangeError::Csv(_)));
        assert!(err.to_string().contains("Row 1"));
    }

    #[test]
    fn test_parse_csv_bad_balance() {
        let data = "date,balance\n2025-01-01,12.50\n";
        assert!(matches!(
            parse_history_csv(data.as_bytes()),
            Err(RangeError::Csv(_))
        ));
    }

    #[test]
    fn test_parse_balance_list() {
        let samples = parse_balance_list("-18000, 9000,").unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].balance.cents(), -18000);

        assert!(parse_balance_list("").unwrap().is_empty());
        assert!(parse_balance_list("10,abc").unwrap_err().is_validation());
    }

    #[test]
    fn test_load_history_by_extension() {
        let temp_dir = TempDir::new().unwrap();

        let json_path = temp_dir.path().join("history.json");
        fs::write(&json_path, r#"[{"balance": 1}, {"date": "2025-02-01", "balance": 2}]"#)
            .unwrap();
        assert_eq!(load_history(&json_path).unwrap().len(), 2);

        let csv_path = temp_dir.path().join("history.CSV");
        fs::write(&csv_path, "date,balance\n2025-02-01,5\n").unwrap();
        assert_eq!(load_history(&csv_path).unwrap()[0].balance.cents(), 5);

        let txt_path = temp_dir.path().join("history.txt");
        fs::write(&txt_path, "1\n").unwrap();
        assert!(load_history(&txt_path).unwrap_err().is_validation());
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_history(temp_dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, RangeError::Storage(_)));
    }
}
