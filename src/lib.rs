//! rangebar - balance range bars for budgeting accounts
//!
//! This library places an account's current balance on a bounded track
//! derived from its recent balance history. The track is expressed as
//! integer minor-unit bounds plus percentage marker positions, ready to be
//! drawn by any front-end.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `range`: The pure range engine (sample window, percent mapping,
//!   degenerate-range expansion, standard and allowance builders)
//! - `models`: Amounts, balance samples, currencies and account snapshots
//! - `reports`: Accounts overview built on the range engine
//! - `display`: Text rendering of range bars and the overview
//! - `export`: JSON and YAML output
//! - `storage`: Loading snapshots and balance history
//! - `config`: Configuration and path management
//! - `logging`: Tracing subscriber setup
//! - `cli`: Command handlers for the `rangebar` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use rangebar::models::{samples_from_cents, Money};
//! use rangebar::range::{build_standard_range_model, RangeInput};
//!
//! let history = samples_from_cents(&[280000, 510000]);
//! let model = build_standard_range_model(&RangeInput::new(
//!     Money::from_cents(548000),
//!     &history,
//!     2,
//! ));
//!
//! assert!(model.is_above_high);
//! assert_eq!(model.above_delta.cents(), 38000);
//! assert_eq!(model.current_pct, 100.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod range;
pub mod reports;
pub mod storage;

pub use error::{RangeError, RangeResult};
pub use range::{
    build_allowance_range_model, build_standard_range_model, AllowanceRangeInput,
    AllowanceRangeModel, RangeInput, RangeModel, StandardRangeModel,
};
