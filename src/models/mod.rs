//! Core data models for rangebar
//!
//! Amounts, balance samples, currencies and the account snapshots the range
//! engine is fed from.

pub mod account;
pub mod currency;
pub mod money;
pub mod sample;

pub use account::{AccountSnapshot, AccountType, AccountValidationError};
pub use currency::Currency;
pub use money::{minor_unit_scale, Money, MAX_DECIMAL_PLACES};
pub use sample::{samples_from_cents, BalanceSample};
