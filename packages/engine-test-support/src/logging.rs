//! Test-binary logging.
//!
//! Called from a `#[ctor]` hook in the engine's unit tests and in each
//! integration test binary.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Checked in order; the first one set supplies the filter.
const FILTER_VARS: [&str; 2] = ["TEST_LOG", "RUST_LOG"];
const DEFAULT_FILTER: &str = "warn";

fn test_filter() -> EnvFilter {
    FILTER_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a captured, timestamp-free subscriber once per process.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let _ = fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init();
    });
}
