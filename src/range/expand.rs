//! Widening of zero-width bounds

use crate::models::{minor_unit_scale, Money};

/// Expansion step for a currency: one major unit, `10^decimal_places` minor units
pub fn expansion_unit(decimal_places: u32) -> Money {
    Money::from_cents(minor_unit_scale(decimal_places))
}

/// Widen `[low, high]` by one major unit on each side when `low == high`
///
/// Non-degenerate bounds are returned unchanged. Arithmetic saturates at
/// the i64 limits.
pub fn expand_degenerate(low: Money, high: Money, decimal_places: u32) -> (Money, Money) {
    if low != high {
        return (low, high);
    }

    let unit = expansion_unit(decimal_places);
    (low.saturating_sub(unit), high.saturating_add(unit))
}
