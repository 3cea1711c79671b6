//! Subscriber initialization for the `docclass` binary.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "DOCCLASS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Initialize the global subscriber. Safe to call more than once.
///
/// Logs go to stderr so that results written to stdout stay parseable.
/// `DOCCLASS_LOG` takes any `EnvFilter` directive, e.g.
/// `DOCCLASS_LOG=docclass::decision=debug,info`.
pub fn init_tracing(json: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        if json {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_thread_ids(true),
                )
                .init();
        }
    });
}
