//! Account snapshot loading
//!
//! Snapshots are JSON exports of the accounts endpoint. Every snapshot is
//! validated on load so the range engine only ever sees representable
//! currencies.

use std::path::Path;

use tracing::{info, warn};

use super::file_io::read_json_required;
use crate::error::{RangeError, RangeResult};
use crate::models::AccountSnapshot;

/// Load a single account snapshot
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> RangeResult<AccountSnapshot> {
    let account: AccountSnapshot = read_json_required(path)?;
    validate(&account)?;
    Ok(account)
}

/// Load a list of account snapshots
pub fn load_snapshots<P: AsRef<Path>>(path: P) -> RangeResult<Vec<AccountSnapshot>> {
    let path = path.as_ref();
    let accounts: Vec<AccountSnapshot> = read_json_required(path)?;

    for account in &accounts {
        validate(account)?;
    }

    if accounts.is_empty() {
        warn!(path = %path.display(), "snapshot file contains no accounts");
    }
    info!(path = %path.display(), accounts = accounts.len(), "loaded account snapshots");
    Ok(accounts)
}

/// Find a snapshot by id or case-insensitive name
pub fn find_account<'a>(
    accounts: &'a [AccountSnapshot],
    identifier: &str,
) -> RangeResult<&'a AccountSnapshot> {
    accounts
        .iter()
        .find(|a| a.id == identifier)
        .or_else(|| {
            accounts
                .iter()
                .find(|a| a.name.eq_ignore_ascii_case(identifier))
        })
        .ok_or_else(|| RangeError::account_not_found(identifier))
}

fn validate(account: &AccountSnapshot) -> RangeResult<()> {
    account
        .validate()
        .map_err(|e| RangeError::Validation(format!("Account '{}': {}", account.name, e)))
}
