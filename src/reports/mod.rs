//! Reports built on top of the range engine

pub mod overview;

pub use overview::{AccountGroup, AccountsOverview, GroupSection, OverviewEntry};
