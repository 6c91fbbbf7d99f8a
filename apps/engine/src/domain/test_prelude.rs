//! Shared proptest configuration for domain property tests.

use proptest::prelude::ProptestConfig;

/// Case count honours `PROPTEST_CASES`, defaulting to a quick 64.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(64);
    ProptestConfig {
        cases,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}
