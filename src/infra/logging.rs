//! For setting up logging.

use super::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Flushes logs upon being dropped.
#[derive(Debug)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// The filter to log with. `RUST_LOG` wins over the configured level.
fn log_filter(config: &LoggingConfig) -> EnvFilter {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.level.clone());
    EnvFilter::new(log_level)
}

/// Initializes logging.
///
/// Logs go to stderr so that they never mix with the greeting on stdout.
pub fn init_logging(config: &LoggingConfig) -> LogGuard {
    let (non_blocking_stderr, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());

    let (text, json) = if config.json {
        let json = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(non_blocking_stderr)
            .json();
        (None, Some(json))
    } else {
        let text = tracing_subscriber::fmt::layer().with_writer(non_blocking_stderr);
        (Some(text), None)
    };

    tracing_subscriber::registry()
        .with(log_filter(config))
        .with(text)
        .with(json)
        .with(ErrorLayer::default())
        .init();

    LogGuard {
        _guards: vec![stderr_guard],
    }
}
