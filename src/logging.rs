//! Log output for the command-line build.
//!
//! Logs go to stderr so the confirmation line on stdout stays clean. `RUST_LOG` picks the
//! verbosity; without it only warnings are shown.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset, empty or invalid.
pub const DEFAULT_FILTER: &str = "warn";

#[must_use]
/// Build the event filter from `RUST_LOG`-style directives, falling back to warnings only.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global stderr subscriber, filtered by `RUST_LOG`.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(directives.as_deref()))
        .init();
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
