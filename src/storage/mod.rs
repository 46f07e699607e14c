//! Input loading for rangebar
//!
//! Reads account snapshots and balance history from disk. Nothing is ever
//! written back; the range engine is read-only over its inputs.

pub mod file_io;
pub mod history;
pub mod snapshots;

pub use history::{load_history, parse_balance_list, parse_history_csv};
pub use snapshots::{find_account, load_snapshot, load_snapshots};
