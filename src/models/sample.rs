//! Balance history samples
//!
//! One sample per day of account history. Only the balance feeds the range
//! builders; the date is carried for loading and display.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// End-of-day balance of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSample {
    /// Day the balance was recorded, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Balance in minor units
    pub balance: Money,
}

impl BalanceSample {
    /// Create an undated sample
    pub const fn new(balance: Money) -> Self {
        Self {
            date: None,
            balance,
        }
    }

    /// Create a sample recorded on a given day
    pub const fn on(date: NaiveDate, balance: Money) -> Self {
        Self {
            date: Some(date),
            balance,
        }
    }
}

/// Build undated samples from raw minor-unit balances, oldest first
pub fn samples_from_cents(balances: &[i64]) -> Vec<BalanceSample> {
    balances
        .iter()
        .map(|&cents| BalanceSample::new(Money::from_cents(cents)))
        .collect()
}
