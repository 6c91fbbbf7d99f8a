//! Process-wide tracing setup for binaries embedding the engine.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output shape of the installed subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    Json,
    #[default]
    Compact,
}

fn filter_or(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`.
///
/// Returns `false` when a subscriber was already installed; the existing
/// one is left in place.
pub fn init(format: LogFormat, default_filter: &str) -> bool {
    let registry = tracing_subscriber::registry().with(filter_or(default_filter));
    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(false)
                    .with_ansi(false),
            )
            .try_init()
            .is_ok(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(false).compact())
            .try_init()
            .is_ok(),
    }
}
