//! Configuration module for rangebar
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::RangebarPaths;
pub use settings::{Settings, MAX_BAR_WIDTH, MIN_BAR_WIDTH};
