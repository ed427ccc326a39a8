//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Verdict tracing/logging system.
///
/// Reads the `VERDICT_LOG` environment variable for filtering.
/// Format: `VERDICT_LOG=verdict_engine=debug,verdict_cli=info`
///
/// Falls back to `info` if `VERDICT_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_with(&ObservabilityConfig::default());
}

/// Initialize tracing from an observability config. `VERDICT_LOG` still
/// takes precedence over the configured level. Logs go to stderr so that
/// stdout stays machine-readable.
pub fn init_with(config: &ObservabilityConfig) {
    let level = config.effective_log_level().to_string();
    let json = config.effective_json();

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(level));

        if json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
