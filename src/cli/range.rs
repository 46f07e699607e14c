//! Range CLI commands
//!
//! Build a single range model from balances given on the command line or
//! loaded from a history file.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::{emit, resolve_decimal_places, resolve_width, OutputFormat};
use crate::config::Settings;
use crate::display::range_bar::{format_allowance_bar, format_standard_bar};
use crate::error::RangeResult;
use crate::models::{BalanceSample, Currency, Money};
use crate::range::{
    build_allowance_range_model, build_standard_range_model, AllowanceRangeInput, RangeInput,
};
use crate::storage::{load_history, parse_balance_list};

/// Arguments shared by both range commands
#[derive(Args, Debug)]
pub struct RangeArgs {
    /// Current balance in minor units (e.g., 452000 for 4,520.00)
    #[arg(short, long, allow_hyphen_values = true)]
    pub current: i64,

    /// Balance history file (.json or .csv), oldest first
    #[arg(long, conflicts_with = "balances")]
    pub history: Option<PathBuf>,

    /// Balance history as minor units, oldest first (e.g., "280000,510000")
    #[arg(short, long, allow_hyphen_values = true)]
    pub balances: Option<String>,

    /// Currency minor-unit exponent (defaults to the configured value)
    #[arg(short, long)]
    pub decimal_places: Option<u32>,

    /// Currency symbol for text output (defaults to the configured value)
    #[arg(long)]
    pub symbol: Option<String>,

    /// Track width in characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl RangeArgs {
    fn load_samples(&self) -> RangeResult<Vec<BalanceSample>> {
        match (&self.history, &self.balances) {
            (Some(path), _) => load_history(path),
            (None, Some(list)) => parse_balance_list(list),
            (None, None) => Ok(Vec::new()),
        }
    }

    fn currency(&self, settings: &Settings, decimal_places: u32) -> Currency {
        let symbol = self
            .symbol
            .clone()
            .unwrap_or_else(|| settings.currency_symbol.clone());
        Currency::new("", symbol, decimal_places)
    }
}

/// Arguments for `rangebar standard`
#[derive(Args, Debug)]
pub struct StandardArgs {
    #[command(flatten)]
    pub range: RangeArgs,
}

/// Arguments for `rangebar allowance`
#[derive(Args, Debug)]
pub struct AllowanceArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Next scheduled transfer in minor units; omit when none is scheduled
    #[arg(short, long, allow_hyphen_values = true)]
    pub next_transfer: Option<i64>,
}

/// Handle `rangebar standard`
pub fn handle_standard_command(settings: &Settings, args: StandardArgs) -> RangeResult<()> {
    let args = args.range;
    let decimal_places = resolve_decimal_places(args.decimal_places, settings)?;
    let width = resolve_width(args.width, settings)?;
    let samples = args.load_samples()?;

    let model = build_standard_range_model(&RangeInput::new(
        Money::from_cents(args.current),
        &samples,
        decimal_places,
    ));
    info!(samples = samples.len(), "standard range built");

    let currency = args.currency(settings, decimal_places);
    emit(&model, args.format, || {
        format_standard_bar(&model, &currency, width)
    })
}

/// Handle `rangebar allowance`
pub fn handle_allowance_command(settings: &Settings, args: AllowanceArgs) -> RangeResult<()> {
    let next_transfer = args.next_transfer.map(Money::from_cents);
    let args = args.range;
    let decimal_places = resolve_decimal_places(args.decimal_places, settings)?;
    let width = resolve_width(args.width, settings)?;
    let samples = args.load_samples()?;

    let model = build_allowance_range_model(&AllowanceRangeInput::new(
        Money::from_cents(args.current),
        next_transfer,
        &samples,
        decimal_places,
    ));
    info!(
        samples = samples.len(),
        scheduled = next_transfer.is_some(),
        "allowance range built"
    );

    let currency = args.currency(settings, decimal_places);
    emit(&model, args.format, || {
        format_allowance_bar(&model, &currency, width)
    })
}
