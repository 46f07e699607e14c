//! Accounts Overview Report
//!
//! Groups accounts into sections, totals each section, computes the net
//! position across all accounts and pairs every account with its range model.

use serde::Serialize;
use std::fmt;

use crate::models::{AccountSnapshot, AccountType, Currency, Money};
use crate::range::RangeModel;

/// Overview section an account is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountGroup {
    /// Checking and wallet accounts
    Liquid,
    /// Allowance accounts
    Allowance,
    /// Savings accounts
    Protected,
    /// Credit cards
    Debt,
}

impl AccountGroup {
    /// Sections in display order
    pub const ORDER: [AccountGroup; 4] = [
        AccountGroup::Liquid,
        AccountGroup::Allowance,
        AccountGroup::Protected,
        AccountGroup::Debt,
    ];

    /// Section an account type belongs to
    pub fn of(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Checking | AccountType::Wallet => Self::Liquid,
            AccountType::Allowance => Self::Allowance,
            AccountType::Savings => Self::Protected,
            AccountType::CreditCard => Self::Debt,
        }
    }
}

impl fmt::Display for AccountGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Liquid => write!(f, "Liquid"),
            Self::Allowance => write!(f, "Allowance"),
            Self::Protected => write!(f, "Protected"),
            Self::Debt => write!(f, "Debt"),
        }
    }
}

/// One account row in the overview
#[derive(Debug, Clone, Serialize)]
pub struct OverviewEntry {
    pub id: String,
    pub name: String,
    pub account_type: AccountType,
    pub currency: Currency,
    pub balance: Money,
    pub balance_change_this_period: Money,
    /// Next scheduled transfer (allowance accounts only)
    pub next_transfer_amount: Option<Money>,
    /// Balance after the next transfer (allowance accounts only)
    pub balance_after_next_transfer: Option<Money>,
    pub range: RangeModel,
}

impl OverviewEntry {
    /// Build the row for an account
    pub fn from_account(account: &AccountSnapshot) -> Self {
        let is_allowance = account.account_type.uses_allowance_range();

        Self {
            id: account.id.clone(),
            name: account.name.clone(),
            account_type: account.account_type,
            currency: account.currency.clone(),
            balance: account.balance,
            balance_change_this_period: account.balance_change_this_period,
            next_transfer_amount: account.next_transfer_amount.filter(|_| is_allowance),
            balance_after_next_transfer: if is_allowance {
                account.balance_after_next_transfer()
            } else {
                None
            },
            range: RangeModel::for_account(account),
        }
    }
}

/// A non-empty overview section
#[derive(Debug, Clone, Serialize)]
pub struct GroupSection {
    pub group: AccountGroup,
    pub entries: Vec<OverviewEntry>,
    /// Sum of the section's balances
    pub total: Money,
}

/// Accounts overview
#[derive(Debug, Clone, Serialize)]
pub struct AccountsOverview {
    /// Non-empty sections in display order
    pub sections: Vec<GroupSection>,
    /// Sum of every account balance
    pub net_position: Money,
    /// Checking and wallet balances
    pub liquid_total: Money,
    /// Savings balances
    pub savings_total: Money,
    /// Credit card balances
    pub debt_total: Money,
    /// Net position as a share of liquid plus savings, floored at zero
    pub progress_pct: Option<f64>,
    /// Currency of the first account, used to print totals
    pub primary_currency: Option<Currency>,
}

impl AccountsOverview {
    /// Generate the overview for a list of accounts
    ///
    /// Totals are plain sums of minor units and assume all accounts share
    /// the primary currency.
    pub fn generate(accounts: &[AccountSnapshot]) -> Self {
        let sections: Vec<GroupSection> = AccountGroup::ORDER
            .iter()
            .filter_map(|&group| {
                let entries: Vec<OverviewEntry> = accounts
                    .iter()
                    .filter(|a| AccountGroup::of(a.account_type) == group)
                    .map(OverviewEntry::from_account)
                    .collect();

                if entries.is_empty() {
                    return None;
                }

                let total = sum_balances(entries.iter().map(|e| e.balance));
                Some(GroupSection {
                    group,
                    entries,
                    total,
                })
            })
            .collect();

        let total_of = |types: &[AccountType]| {
            sum_balances(
                accounts
                    .iter()
                    .filter(|a| types.contains(&a.account_type))
                    .map(|a| a.balance),
            )
        };

        let net_position = sum_balances(accounts.iter().map(|a| a.balance));
        let liquid_total = total_of(&[AccountType::Checking, AccountType::Wallet]);
        let savings_total = total_of(&[AccountType::Savings]);
        let debt_total = total_of(&[AccountType::CreditCard]);

        let progress_max = liquid_total.saturating_add(savings_total);
        let progress_pct = progress_max.is_positive().then(|| {
            (net_position.cents() as f64 / progress_max.cents() as f64 * 100.0).max(0.0)
        });

        Self {
            sections,
            net_position,
            liquid_total,
            savings_total,
            debt_total,
            progress_pct,
            primary_currency: accounts.first().map(|a| a.currency.clone()),
        }
    }

    /// Find the section for a group, if it has any accounts
    pub fn section(&self, group: AccountGroup) -> Option<&GroupSection> {
        self.sections.iter().find(|s| s.group == group)
    }

    /// Number of accounts across all sections
    pub fn account_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

fn sum_balances(balances: impl Iterator<Item = Money>) -> Money {
    balances.fold(Money::zero(), Money::saturating_add)
}
