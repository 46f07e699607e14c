//! Currency descriptor
//!
//! Only `decimal_places` matters to the range engine; code and symbol are used
//! when amounts are printed.

use serde::{Deserialize, Serialize};

use super::money::{Money, MAX_DECIMAL_PLACES};

/// A currency and its minor-unit convention
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code (e.g., "USD")
    #[serde(alias = "currency")]
    pub code: String,

    /// Display symbol (e.g., "$")
    #[serde(default)]
    pub symbol: String,

    /// Minor-unit exponent (2 for cents, 0 for JPY, 3 for KWD)
    #[serde(alias = "decimalPlaces")]
    pub decimal_places: u32,
}

impl Currency {
    /// Create a new currency descriptor
    pub fn new(code: impl Into<String>, symbol: impl Into<String>, decimal_places: u32) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
            decimal_places,
        }
    }

    /// Format an amount of this currency
    pub fn format(&self, amount: Money) -> String {
        amount.format(self.decimal_places, &self.symbol)
    }

    /// Check the minor-unit exponent is representable
    pub fn has_valid_decimal_places(&self) -> bool {
        self.decimal_places <= MAX_DECIMAL_PLACES
    }
}

impl Default for Currency {
    fn default() -> Self {
        Self::new("USD", "$", 2)
    }
}
