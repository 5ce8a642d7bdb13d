// SPDX-License-Identifier: MPL-2.0
//! Logging setup for the application.
//!
//! Installs a global tracing subscriber writing to stdout, filtered by
//! `RUST_LOG` when set.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Subsequent calls are no-ops so tests may call this freely.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
    }
}
