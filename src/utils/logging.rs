//! Diagnostic logging. Stdout is reserved for the status-bar host, so
//! everything goes to stderr and stays silent unless asked for.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::errors::{AppError, AppResult};

/// Install the global subscriber.
///
/// `verbose` forces TRACE; otherwise `RUST_LOG` decides, and without it
/// nothing is logged.
pub fn enable_logging(verbose: bool) -> AppResult<()> {
    let level = if verbose {
        LevelFilter::TRACE.to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "off".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "{}={level}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
        )))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
