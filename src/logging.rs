// SPDX-License-Identifier: MPL-2.0
//! Structured logging setup.
//!
//! Output goes to stderr in the compact `tracing-subscriber` format.
//! `RUST_LOG` wins over the built-in filter when set.
//!
//! ```rust,ignore
//! akanni::logging::init();
//! tracing::info!(route = "/testimonials", "navigated");
//! ```

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "akanni=info";

/// Installs the global subscriber. A second call is a no-op.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Installs the global subscriber with `default_filter` as the fallback.
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .finish()
        .try_init();

    if result.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
