//! Overview CLI command

use clap::Args;
use std::path::PathBuf;

use super::{emit, resolve_width, OutputFormat};
use crate::config::Settings;
use crate::display::format_overview;
use crate::error::RangeResult;
use crate::reports::AccountsOverview;
use crate::storage::load_snapshots;

/// Arguments for `rangebar overview`
#[derive(Args, Debug)]
pub struct OverviewArgs {
    /// Snapshot file containing a list of accounts
    pub file: PathBuf,

    /// Track width in characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Handle `rangebar overview`
pub fn handle_overview_command(settings: &Settings, args: OverviewArgs) -> RangeResult<()> {
    let width = resolve_width(args.width, settings)?;
    let accounts = load_snapshots(&args.file)?;
    let overview = AccountsOverview::generate(&accounts);

    emit(&overview, args.format, || format_overview(&overview, width))
}
