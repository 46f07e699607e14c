//! Allowance range builder
//!
//! Allowance accounts are expected to swing around zero and get topped up by
//! a scheduled transfer. Zero and the projected balance (or the current one
//! when nothing is scheduled) are always inside the bounds, so the zero
//! marker is always drawn.

use serde::Serialize;
use tracing::debug;

use super::expand::expand_degenerate;
use super::percent::to_percent;
use super::window::{sample_window, window_bounds};
use super::AllowanceRangeInput;
use crate::models::Money;

/// Range model for allowance accounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllowanceRangeModel {
    /// Lower bound of the track, never above zero
    pub low: Money,
    /// Upper bound of the track, never below zero
    pub high: Money,
    /// Current balance
    pub current: Money,
    /// Balance after the next transfer, if one is scheduled
    pub projected: Option<Money>,
    /// Current-balance marker position
    pub current_pct: f64,
    /// Zero marker position
    pub zero_pct: f64,
    /// Projected-balance marker position, present iff `projected` is
    pub projected_pct: Option<f64>,
}

/// Build the range model for an allowance account
pub fn build_allowance_range_model(input: &AllowanceRangeInput<'_>) -> AllowanceRangeModel {
    let current = input.current_balance;

    let window = sample_window(input.balance_per_day, current);
    let (hist_low, hist_high) = window_bounds(&window);

    let projected = input
        .next_transfer_amount
        .map(|amount| current.saturating_add(amount));
    let anchor = projected.unwrap_or(current);

    let low = hist_low.min(Money::zero()).min(anchor);
    let high = hist_high.max(Money::zero()).max(anchor);
    let (low, high) = expand_degenerate(low, high, input.decimal_places);

    debug!(
        low = low.cents(),
        high = high.cents(),
        current = current.cents(),
        projected = ?projected.map(|p| p.cents()),
        "built allowance range"
    );

    AllowanceRangeModel {
        low,
        high,
        current,
        projected,
        current_pct: to_percent(current, low, high),
        zero_pct: to_percent(Money::zero(), low, high),
        projected_pct: projected.map(|p| to_percent(p, low, high)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::samples_from_cents;

    const DECIMAL_PLACES: u32 = 2;

    fn build(
        current: i64,
        next_transfer: Option<i64>,
        history: &[i64],
        decimal_places: u32,
    ) -> AllowanceRangeModel {
        let samples = samples_from_cents(history);
        build_allowance_range_model(&AllowanceRangeInput::new(
            Money::from_cents(current),
            next_transfer.map(Money::from_cents),
            &samples,
            decimal_places,
        ))
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_current_and_projected_inside_history() {
        let model = build(-5000, Some(10000), &[-18000, 9000], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), -18000);
        assert_eq!(model.high.cents(), 9000);
        assert_eq!(model.current.cents(), -5000);
        assert_eq!(model.projected, Some(Money::from_cents(5000)));
        assert_close(model.current_pct, 48.15);
        assert_close(model.projected_pct.unwrap(), 85.19);
        assert_close(model.zero_pct, 66.67);
    }

    #[test]
    fn test_current_below_zero_projected_above() {
        let model = build(-5000, Some(10000), &[], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), -5000);
        assert_eq!(model.high.cents(), 5000);
        assert_eq!(model.projected, Some(Money::from_cents(5000)));
        assert_eq!(model.current_pct, 0.0);
        assert_eq!(model.projected_pct, Some(100.0));
        assert_eq!(model.zero_pct, 50.0);
    }

    #[test]
    fn test_no_next_transfer_means_no_projection() {
        let model = build(4000, None, &[-11000, 14000], DECIMAL_PLACES);

        assert_eq!(model.projected, None);
        assert_eq!(model.projected_pct, None);
        assert_eq!(model.low.cents(), -11000);
        assert_eq!(model.high.cents(), 14000);
    }

    #[test]
    fn test_zero_transfer_is_not_absent() {
        let model = build(4000, Some(0), &[-11000, 14000], DECIMAL_PLACES);

        assert_eq!(model.projected, Some(Money::from_cents(4000)));
        assert_close(model.projected_pct.unwrap(), model.current_pct);
    }

    #[test]
    fn test_no_history_falls_back_to_current() {
        let model = build(3000, None, &[], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), 0);
        assert_eq!(model.high.cents(), 3000);
    }

    #[test]
    fn test_flat_history_widened_by_zero_not_expansion() {
        let model = build(5000, None, &[5000, 5000, 5000], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), 0);
        assert_eq!(model.high.cents(), 5000);
    }

    #[test]
    fn test_all_zero_triggers_expansion() {
        let model = build(0, None, &[], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), -100);
        assert_eq!(model.high.cents(), 100);
        assert_eq!(model.zero_pct, 50.0);
        assert_eq!(model.current_pct, 50.0);
    }

    #[test]
    fn test_very_negative_projection_extends_low() {
        let model = build(-5000, Some(-20000), &[-1000, 2000], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), -25000);
        assert_eq!(model.high.cents(), 2000);
        assert_eq!(model.projected, Some(Money::from_cents(-25000)));
        assert_eq!(model.projected_pct, Some(0.0));
    }

    #[test]
    fn test_very_positive_projection_extends_high() {
        let model = build(1000, Some(50000), &[500, 2000], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), 0);
        assert_eq!(model.high.cents(), 51000);
        assert_eq!(model.projected, Some(Money::from_cents(51000)));
        assert_eq!(model.projected_pct, Some(100.0));
    }

    #[test]
    fn test_zero_decimal_places_unit_is_one() {
        let model = build(0, None, &[], 0);
        assert_eq!(model.low.cents(), -1);
        assert_eq!(model.high.cents(), 1);
    }

    #[test]
    fn test_three_decimal_places_unit_is_thousand() {
        let model = build(0, None, &[], 3);
        assert_eq!(model.low.cents(), -1000);
        assert_eq!(model.high.cents(), 1000);
    }

    #[test]
    fn test_markers_clamped_at_edges() {
        let model = build(5000, None, &[1000, 4000], DECIMAL_PLACES);

        assert_eq!(model.low.cents(), 0);
        assert_eq!(model.high.cents(), 5000);
        assert_eq!(model.current_pct, 100.0);
        assert_eq!(model.zero_pct, 0.0);
    }

    #[test]
    fn test_only_last_thirty_samples_count() {
        let mut history = vec![-999999; 10];
        history.extend(std::iter::repeat(2500).take(30));

        let model = build(1000, None, &history, DECIMAL_PLACES);
        assert_eq!(model.low.cents(), 0);
        assert_eq!(model.high.cents(), 2500);
    }

    #[test]
    fn test_invariants_hold_across_inputs() {
        let histories: [&[i64]; 4] = [&[], &[0, 0], &[-18000, 9000], &[300, 700]];
        let transfers = [None, Some(0), Some(-40000), Some(12000)];
        for history in histories {
            for next_transfer in transfers {
                for current in [-20000, 0, 450, 30000] {
                    let model = build(current, next_transfer, history, DECIMAL_PLACES);

                    assert!(model.low <= Money::zero());
                    assert!(model.high >= Money::zero());
                    assert!(model.low < model.high);
                    assert!((0.0..=100.0).contains(&model.current_pct));
                    assert!((0.0..=100.0).contains(&model.zero_pct));
                    assert_eq!(model.projected.is_none(), model.projected_pct.is_none());
                    assert_eq!(model.projected.is_none(), next_transfer.is_none());
                    if let Some(pct) = model.projected_pct {
                        assert!((0.0..=100.0).contains(&pct));
                    }
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let first = build(-5000, Some(10000), &[-18000, 9000], DECIMAL_PLACES);
        let second = build(-5000, Some(10000), &[-18000, 9000], DECIMAL_PLACES);
        assert_eq!(first, second);
    }
}
