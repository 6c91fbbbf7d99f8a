//! Domain layer: pure game logic types and helpers.

pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod contract;
pub mod dealing;
pub mod player_view;
pub mod round_memory;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;
pub mod tricks;
pub mod troel;

#[cfg(test)]
pub(crate) mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_bidding;
#[cfg(test)]
mod tests_props_cards;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_props_tricks;
#[cfg(test)]
mod tests_scenarios;

// Re-exports for ergonomics
pub use bidding::{Bid, BidOutcome};
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_types::{Card, Rank, Suit};
pub use contract::{Contract, ContractKind};
pub use dealing::Deck;
pub use player_view::{BidContext, PlayContext};
pub use round_memory::{RoundMemory, SeatVoids};
pub use scoring::RoundScores;
pub use seed_derivation::{derive_dealing_seed, derive_seat_seed};
pub use state::{Phase, PlayRecord, RoundOutcome, RoundState, Seat, Trick};
