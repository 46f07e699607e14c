//! Money type for representing currency amounts
//!
//! Amounts are stored as integer minor units (i64) of whatever currency they
//! belong to. The number of minor units per major unit is `10^decimal_places`
//! and is supplied by the caller; `Money` itself carries no currency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest minor-unit exponent whose scale (`10^18`) still fits in an i64
pub const MAX_DECIMAL_PLACES: u32 = 18;

/// Number of minor units in one major unit (`10^decimal_places`)
///
/// Saturates to `i64::MAX` when the scale does not fit.
pub fn minor_unit_scale(decimal_places: u32) -> i64 {
    10i64.checked_pow(decimal_places).unwrap_or(i64::MAX)
}

/// A monetary amount in minor units (cents for a 2-decimal currency)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use rangebar::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50 in a 2-decimal currency
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Addition clamped at the i64 bounds
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Subtraction clamped at the i64 bounds
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Format as a major-unit amount with a currency symbol
    ///
    /// Uses `,` as the thousands separator and `.` before the fraction, e.g.
    /// `-$1,234.56` for `-123456` at two decimal places.
    pub fn format(&self, decimal_places: u32, symbol: &str) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let magnitude = self.0.unsigned_abs();

        if decimal_places == 0 {
            return format!("{}{}{}", sign, symbol, group_thousands(magnitude));
        }

        let scale = minor_unit_scale(decimal_places) as u64;
        let whole = magnitude / scale;
        let fraction = magnitude % scale;

        format!(
            "{}{}{}.{:0width$}",
            sign,
            symbol,
            group_thousands(whole),
            fraction,
            width = decimal_places as usize
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Displays the raw minor-unit count; use [`Money::format`] for currency output
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(cents: i64) -> Self {
        Self(cents)
    }
}
