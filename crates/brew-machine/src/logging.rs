//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise machine events are shown at debug
//! and everything else at info.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info,brew=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global fmt subscriber. Panics if one is already set.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .init();
}

/// Like [`init_tracing`], but returns false instead of panicking when a
/// global subscriber already exists.
pub fn try_init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .try_init()
        .is_ok()
}
