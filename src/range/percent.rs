//! Percent mapping onto a bounded track

use crate::models::Money;

/// Position returned when the interval has no width
pub const DEGENERATE_PERCENT: f64 = 50.0;

/// Position of `value` within `[low, high]` as a percentage clamped to `[0, 100]`
///
/// Returns [`DEGENERATE_PERCENT`] when `high <= low`. The range builders
/// always widen a zero-width interval first, so this only guards callers
/// that skip expansion.
pub fn to_percent(value: Money, low: Money, high: Money) -> f64 {
    if high <= low {
        return DEGENERATE_PERCENT;
    }

    // i128 keeps the differences exact across the whole i64 domain
    let offset = (value.cents() as i128 - low.cents() as i128) as f64;
    let span = (high.cents() as i128 - low.cents() as i128) as f64;
    let raw = offset / span * 100.0;

    raw.clamp(0.0, 100.0)
}
