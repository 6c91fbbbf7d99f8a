#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use ai::{AiError, AiPlayer, Difficulty};
pub use domain::{Bid, Card, ContractKind, Phase, Rank, RoundState, Seat, Suit};
pub use errors::domain::{DomainError, ValidationKind};
pub use services::game_flow::{GameFlow, RoundSummary, SeatConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
