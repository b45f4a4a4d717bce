//! Logging and tracing setup for the board shell.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingConfig};

/// Used when neither `RUST_LOG` nor the configured filter parses.
pub const DEFAULT_FILTER: &str = "board_shell=info,tower_http=info";

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes precedence over `logging.filter` from the config.
pub fn init(config: &LoggingConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(rust_log.as_deref(), &config.filter);

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty().with_target(true))
            .init(),
    }
}

/// Pick the first filter that parses: `RUST_LOG`, then the configured one,
/// then [`DEFAULT_FILTER`].
fn resolve_filter(rust_log: Option<&str>, configured: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing for tests (human-readable format, no JSON).
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("board_shell=debug")
        .try_init();
}
