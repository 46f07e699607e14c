//! Standard range builder
//!
//! Bounds come from recent history alone, so the current balance may sit
//! outside them. That case is reported through the above/below flags and
//! the matching delta rather than by stretching the range.

use serde::Serialize;
use tracing::debug;

use super::expand::expand_degenerate;
use super::percent::to_percent;
use super::window::{sample_window, window_bounds};
use super::RangeInput;
use crate::models::Money;

/// Range model for ordinary (non-allowance) accounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardRangeModel {
    /// Lower bound of the track
    pub low: Money,
    /// Upper bound of the track
    pub high: Money,
    /// Current balance
    pub current: Money,
    /// Current-balance marker position, clamped to [0, 100]
    pub current_pct: f64,
    /// Zero marker position, present only when the track straddles zero
    pub zero_pct: Option<f64>,
    /// Current balance exceeds the upper bound
    pub is_above_high: bool,
    /// Current balance is under the lower bound
    pub is_below_low: bool,
    /// How far the current balance is above `high` (zero unless above)
    pub above_delta: Money,
    /// How far the current balance is below `low` (zero unless below)
    pub below_delta: Money,
}

/// Where the current balance sits relative to the recent range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    /// Above the recent range by the given amount
    AboveHigh(Money),
    /// Below the recent range by the given amount
    BelowLow(Money),
    /// Within the recent range
    WithinRange,
}

impl StandardRangeModel {
    /// Classify the current balance against the bounds
    pub fn status(&self) -> RangeStatus {
        if self.is_above_high {
            RangeStatus::AboveHigh(self.above_delta)
        } else if self.is_below_low {
            RangeStatus::BelowLow(self.below_delta)
        } else {
            RangeStatus::WithinRange
        }
    }
}

/// Build the range model for an ordinary account
pub fn build_standard_range_model(input: &RangeInput<'_>) -> StandardRangeModel {
    let current = input.current_balance;

    let window = sample_window(input.balance_per_day, current);
    let (low, high) = window_bounds(&window);
    let (low, high) = expand_degenerate(low, high, input.decimal_places);

    let is_above_high = current > high;
    let is_below_low = current < low;
    let zero_in_range = low <= Money::zero() && high >= Money::zero();

    debug!(
        low = low.cents(),
        high = high.cents(),
        current = current.cents(),
        samples = window.len(),
        "built standard range"
    );

    StandardRangeModel {
        low,
        high,
        current,
        current_pct: to_percent(current, low, high),
        zero_pct: zero_in_range.then(|| to_percent(Money::zero(), low, high)),
        is_above_high,
        is_below_low,
        above_delta: if is_above_high {
            current.saturating_sub(high)
        } else {
            Money::zero()
        },
        below_delta: if is_below_low {
            low.saturating_sub(current)
        } else {
            Money::zero()
        },
    }
}
