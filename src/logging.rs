//! Tracing setup
//!
//! Logs go to stderr so that JSON/YAML output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence; otherwise `default_directive` (e.g. "warn" or
/// "rangebar=debug") is used. Only the first call has any effect.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_twice_does_not_panic() {
        super::init_tracing("debug");
        super::init_tracing("not a valid directive [");
    }
}
