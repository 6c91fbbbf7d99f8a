//! Decision engine trait definition.

use std::fmt;

use rand::RngCore;

use crate::domain::player_view::{BidContext, PlayContext};
use crate::domain::{Bid, Card, Suit};
use crate::errors::domain::DomainError;

/// Errors that can occur during AI decision-making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// AI produced (or was asked to choose from) no legal move
    InvalidMove(String),
    /// AI encountered an internal error
    Internal(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::config(format!("AI error: {err}"))
    }
}

/// Trait for automated seats.
///
/// Implementations receive only what the acting seat can see and must
/// return an action drawn from the context's legal set. They hold no
/// per-round state; randomness comes from the caller's `rng` so a seeded
/// source reproduces every decision.
pub trait AiPlayer: Send + Sync {
    fn difficulty(&self) -> super::Difficulty;

    /// Choose a bid in the main auction.
    ///
    /// The suggestion is advisory: callers re-validate it with
    /// `bidding::sanitize_bid` before placing it.
    fn choose_bid(&self, ctx: &BidContext, rng: &mut dyn RngCore) -> Result<Bid, AiError>;

    /// Unanswered asker: `Bid::Alone` or `Bid::Pass`.
    fn choose_alone_or_pass(&self, ctx: &BidContext) -> Result<Bid, AiError>;

    /// Choose a card to play from `ctx.legal`.
    fn choose_play(&self, ctx: &PlayContext, rng: &mut dyn RngCore) -> Result<Card, AiError>;

    /// Trump override for an Abundance or Grand-Slam declarer.
    fn choose_trump(&self, hand: &[Card], rng: &mut dyn RngCore) -> Result<Suit, AiError>;
}
