//! Shared helpers for wiezen-engine tests.

pub mod logging;
