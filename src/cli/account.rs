//! Account CLI command
//!
//! Renders the range bar of one account snapshot, picking the builder from
//! the account type.

use clap::Args;
use std::path::PathBuf;

use super::{emit, resolve_width, OutputFormat};
use crate::config::Settings;
use crate::display::format_entry;
use crate::error::RangeResult;
use crate::reports::OverviewEntry;
use crate::storage::{find_account, load_snapshot, load_snapshots};

/// Arguments for `rangebar account`
#[derive(Args, Debug)]
pub struct AccountArgs {
    /// Snapshot file: one account, or a list when --name is given
    pub file: PathBuf,

    /// Account id or name to pick from a list of snapshots
    #[arg(short, long)]
    pub name: Option<String>,

    /// Track width in characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Handle `rangebar account`
pub fn handle_account_command(settings: &Settings, args: AccountArgs) -> RangeResult<()> {
    let width = resolve_width(args.width, settings)?;

    let entry = match &args.name {
        Some(name) => {
            let accounts = load_snapshots(&args.file)?;
            OverviewEntry::from_account(find_account(&accounts, name)?)
        }
        None => OverviewEntry::from_account(&load_snapshot(&args.file)?),
    };

    emit(&entry, args.format, || format_entry(&entry, width))
}
