//! Structured logging setup.
//!
//! Logs go to stderr so stdout carries only command output. Verbosity is
//! taken from `RUST_LOG` when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "warn";

/// Default filter with `--verbose`
const VERBOSE_FILTER: &str = "warn,coincap_cli=debug";

/// Picks the filter directive used when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}

/// Initializes the logging system.
///
/// Example RUST_LOG values:
/// - `info` - All info and above
/// - `coincap_cli=trace,reqwest=debug` - Trace for us, debug for the HTTP client
pub fn init_telemetry(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .compact(),
    );

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = subscriber.try_init();
}
