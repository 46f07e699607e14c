//! Account snapshot model
//!
//! A read-only view of an account as delivered by the budgeting backend:
//! its type, currency, current balance and recent daily balances.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::currency::Currency;
use super::money::{Money, MAX_DECIMAL_PLACES};
use super::sample::BalanceSample;

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    /// Checking account
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    CreditCard,
    /// Cash/wallet
    Wallet,
    /// Allowance account topped up by scheduled transfers
    Allowance,
}

impl AccountType {
    /// Returns true if this account is drawn with the allowance range bar
    pub fn uses_allowance_range(&self) -> bool {
        matches!(self, Self::Allowance)
    }
}

impl Default for AccountType {
    fn default() -> Self {
        Self::Checking
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::CreditCard => write!(f, "Credit Card"),
            Self::Wallet => write!(f, "Wallet"),
            Self::Allowance => write!(f, "Allowance"),
        }
    }
}

/// An account with its balance history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountSnapshot {
    /// Backend identifier
    #[serde(default)]
    pub id: String,

    /// Account name (e.g., "Pocket Money")
    pub name: String,

    /// Type of account
    #[serde(alias = "accountType", alias = "account_type")]
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Currency of every amount on this account
    #[serde(default)]
    pub currency: Currency,

    /// Current balance
    pub balance: Money,

    /// Amount of the next scheduled transfer (allowance accounts)
    #[serde(default, alias = "nextTransferAmount")]
    pub next_transfer_amount: Option<Money>,

    /// Net balance change in the current budget period
    #[serde(default, alias = "balanceChangeThisPeriod")]
    pub balance_change_this_period: Money,

    /// Daily balances, oldest first
    #[serde(default, alias = "balancePerDay")]
    pub balance_per_day: Vec<BalanceSample>,
}

impl AccountSnapshot {
    /// Create a snapshot with no history
    pub fn new(name: impl Into<String>, account_type: AccountType, balance: Money) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            account_type,
            currency: Currency::default(),
            balance,
            next_transfer_amount: None,
            balance_change_this_period: Money::zero(),
            balance_per_day: Vec::new(),
        }
    }

    /// Balance after the next scheduled transfer, if one is scheduled
    pub fn balance_after_next_transfer(&self) -> Option<Money> {
        self.next_transfer_amount
            .map(|amount| self.balance.saturating_add(amount))
    }

    /// Validate the snapshot
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if !self.currency.has_valid_decimal_places() {
            return Err(AccountValidationError::DecimalPlacesOutOfRange(
                self.currency.decimal_places,
            ));
        }

        Ok(())
    }
}

impl fmt::Display for AccountSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Validation errors for account snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    DecimalPlacesOutOfRange(u32),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::DecimalPlacesOutOfRange(places) => write!(
                f,
                "Currency decimal places {} out of range (max {})",
                places, MAX_DECIMAL_PLACES
            ),
        }
    }
}

impl std::error::Error for AccountValidationError {}
