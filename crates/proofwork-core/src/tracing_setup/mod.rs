//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::constants::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "PROOFWORK_LOG";

/// Initialize the ProofWork tracing subscriber.
///
/// Reads `PROOFWORK_LOG` for per-module log levels, e.g.
/// `PROOFWORK_LOG=proofwork_reputation=debug,proofwork_session=info`.
/// Falls back to `proofwork=info` if unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with(&LoggingConfig::default());
}

/// Initialize tracing from a `LoggingConfig`. `PROOFWORK_LOG` still takes
/// precedence over `config.filter`.
pub fn init_tracing_with(config: &LoggingConfig) {
    let fallback = config.effective_filter().to_string();
    let json = config.effective_json();

    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(&fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        };
        // An embedder may already own the global subscriber.
        let _ = result;
    });
}
