//! Display formatting for terminal output
//!
//! Renders range models and the accounts overview as plain text. Currency
//! amounts are formatted here, never inside the range engine.

pub mod format;
pub mod overview;
pub mod range_bar;

pub use overview::{format_entry, format_overview};
pub use range_bar::{format_allowance_bar, format_range_bar, format_standard_bar};
