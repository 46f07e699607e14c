//! Range bar rendering
//!
//! Draws a range model as a text track with markers, a legend, the bounds
//! and (for standard accounts) a status line. Percent positions come straight
//! from the model; this module only maps them to character columns.

use crate::models::{Currency, Money};
use crate::range::{AllowanceRangeModel, RangeModel, RangeStatus, StandardRangeModel};

use super::format::spread;

/// Track background character
pub const TRACK_GLYPH: char = '─';
/// Zero line marker
pub const ZERO_GLYPH: char = '┃';
/// Current balance marker
pub const CURRENT_GLYPH: char = '●';
/// Projected balance marker
pub const PROJECTED_GLYPH: char = '◆';

/// A marker placed on the track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub pct: f64,
    pub glyph: char,
}

impl Marker {
    pub const fn new(pct: f64, glyph: char) -> Self {
        Self { pct, glyph }
    }
}

/// Column of a percentage on a track of `width` cells
pub fn marker_column(pct: f64, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 50.0 };
    let last = (width - 1) as f64;
    (pct / 100.0 * last).round() as usize
}

/// Draw a track of `width` cells between brackets
///
/// Markers are drawn in order, so later markers win a shared cell.
pub fn render_track(markers: &[Marker], width: usize) -> String {
    let mut cells = vec![TRACK_GLYPH; width];
    for marker in markers {
        if let Some(cell) = cells.get_mut(marker_column(marker.pct, width)) {
            *cell = marker.glyph;
        }
    }

    let mut track = String::with_capacity(width * 3 + 2);
    track.push('[');
    track.extend(cells);
    track.push(']');
    track
}

/// One-line description of where the current balance sits
pub fn standard_status_text(model: &StandardRangeModel, currency: &Currency) -> String {
    match model.status() {
        RangeStatus::AboveHigh(delta) => {
            format!("Above recent range by {}", currency.format(delta))
        }
        RangeStatus::BelowLow(delta) => {
            format!("Below recent range by {}", currency.format(delta))
        }
        RangeStatus::WithinRange => "Within recent range".to_string(),
    }
}

/// Render a standard range bar
pub fn format_standard_bar(model: &StandardRangeModel, currency: &Currency, width: usize) -> String {
    let mut markers = Vec::with_capacity(2);
    if let Some(zero_pct) = model.zero_pct {
        markers.push(Marker::new(zero_pct, ZERO_GLYPH));
    }
    markers.push(Marker::new(model.current_pct, CURRENT_GLYPH));

    let mut output = String::new();
    output.push_str("Recent range\n");
    output.push_str(&render_track(&markers, width));
    output.push('\n');
    output.push_str(&bounds_line(model.low, model.high, currency, width));
    output.push('\n');

    let mut legend = format!("{} Current: {}", CURRENT_GLYPH, currency.format(model.current));
    if model.zero_pct.is_some() {
        legend.push_str(&format!("   {} Zero", ZERO_GLYPH));
    }
    output.push_str(&legend);
    output.push('\n');
    output.push_str(&standard_status_text(model, currency));
    output.push('\n');

    output
}

/// Render an allowance range bar
pub fn format_allowance_bar(
    model: &AllowanceRangeModel,
    currency: &Currency,
    width: usize,
) -> String {
    let mut markers = vec![Marker::new(model.zero_pct, ZERO_GLYPH)];
    if let Some(projected_pct) = model.projected_pct {
        markers.push(Marker::new(projected_pct, PROJECTED_GLYPH));
    }
    markers.push(Marker::new(model.current_pct, CURRENT_GLYPH));

    let mut output = String::new();
    output.push_str("Range (includes zero and next transfer)\n");
    output.push_str(&render_track(&markers, width));
    output.push('\n');
    output.push_str(&bounds_line(model.low, model.high, currency, width));
    output.push('\n');

    let mut legend = format!("{} Current: {}", CURRENT_GLYPH, currency.format(model.current));
    if let Some(projected) = model.projected {
        legend.push_str(&format!(
            "   {} After next transfer: {}",
            PROJECTED_GLYPH,
            currency.format(projected)
        ));
    }
    legend.push_str(&format!("   {} Zero", ZERO_GLYPH));
    output.push_str(&legend);
    output.push('\n');

    output
}

/// Render either kind of range bar
pub fn format_range_bar(model: &RangeModel, currency: &Currency, width: usize) -> String {
    match model {
        RangeModel::Standard(m) => format_standard_bar(m, currency, width),
        RangeModel::Allowance(m) => format_allowance_bar(m, currency, width),
    }
}

fn bounds_line(low: Money, high: Money, currency: &Currency, width: usize) -> String {
    // +2 for the brackets around the track
    spread(&currency.format(low), &currency.format(high), width + 2)
}
