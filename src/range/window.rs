//! Sample window selection
//!
//! Bounds are computed from recent history only. Anything older than the
//! window is ignored no matter how long the supplied history is.

use crate::models::{BalanceSample, Money};

/// Number of most recent samples that influence the range bounds
pub const SAMPLE_WINDOW: usize = 30;

/// Balances of the last [`SAMPLE_WINDOW`] samples, oldest first
///
/// An empty history yields `[current_balance]`.
pub fn sample_window(history: &[BalanceSample], current_balance: Money) -> Vec<Money> {
    let start = history.len().saturating_sub(SAMPLE_WINDOW);
    let base: Vec<Money> = history[start..].iter().map(|s| s.balance).collect();

    if base.is_empty() {
        vec![current_balance]
    } else {
        base
    }
}

/// Smallest and largest value of a non-empty window
pub(crate) fn window_bounds(window: &[Money]) -> (Money, Money) {
    let low = window.iter().copied().min().unwrap_or_default();
    let high = window.iter().copied().max().unwrap_or_default();
    (low, high)
}
