//! Balance range engine
//!
//! Turns an account's recent balance history into a bounded track with
//! percentage marker positions. Everything here is pure: no I/O, no shared
//! state, and every input maps to a model without failing.
//!
//! Two builders share the window, percent and expansion helpers but differ
//! in which values are forced into the bounds:
//!
//! - [`build_standard_range_model`]: history only
//! - [`build_allowance_range_model`]: history, zero, and the projected
//!   (or current) balance

pub mod allowance;
pub mod expand;
pub mod percent;
pub mod standard;
pub mod window;

pub use allowance::{build_allowance_range_model, AllowanceRangeModel};
pub use expand::{expand_degenerate, expansion_unit};
pub use percent::to_percent;
pub use standard::{build_standard_range_model, RangeStatus, StandardRangeModel};
pub use window::{sample_window, SAMPLE_WINDOW};

use serde::Serialize;

use crate::models::{AccountSnapshot, BalanceSample, Money};

/// Input shared by both builders
#[derive(Debug, Clone, Copy)]
pub struct RangeInput<'a> {
    /// Current balance
    pub current_balance: Money,
    /// Daily balances, oldest first
    pub balance_per_day: &'a [BalanceSample],
    /// Minor-unit exponent of the account currency
    pub decimal_places: u32,
}

impl<'a> RangeInput<'a> {
    pub fn new(
        current_balance: Money,
        balance_per_day: &'a [BalanceSample],
        decimal_places: u32,
    ) -> Self {
        Self {
            current_balance,
            balance_per_day,
            decimal_places,
        }
    }
}

/// Input for allowance accounts
#[derive(Debug, Clone, Copy)]
pub struct AllowanceRangeInput<'a> {
    /// Current balance
    pub current_balance: Money,
    /// Next scheduled transfer; `None` means nothing is scheduled
    pub next_transfer_amount: Option<Money>,
    /// Daily balances, oldest first
    pub balance_per_day: &'a [BalanceSample],
    /// Minor-unit exponent of the account currency
    pub decimal_places: u32,
}

impl<'a> AllowanceRangeInput<'a> {
    pub fn new(
        current_balance: Money,
        next_transfer_amount: Option<Money>,
        balance_per_day: &'a [BalanceSample],
        decimal_places: u32,
    ) -> Self {
        Self {
            current_balance,
            next_transfer_amount,
            balance_per_day,
            decimal_places,
        }
    }
}

/// Range model of either kind
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RangeModel {
    Standard(StandardRangeModel),
    Allowance(AllowanceRangeModel),
}

impl RangeModel {
    /// Build the model an account is drawn with
    ///
    /// Allowance accounts get the allowance model with their next transfer;
    /// every other type gets the standard model and ignores any transfer.
    pub fn for_account(account: &AccountSnapshot) -> Self {
        let decimal_places = account.currency.decimal_places;

        if account.account_type.uses_allowance_range() {
            Self::Allowance(build_allowance_range_model(&AllowanceRangeInput::new(
                account.balance,
                account.next_transfer_amount,
                &account.balance_per_day,
                decimal_places,
            )))
        } else {
            Self::Standard(build_standard_range_model(&RangeInput::new(
                account.balance,
                &account.balance_per_day,
                decimal_places,
            )))
        }
    }
}
