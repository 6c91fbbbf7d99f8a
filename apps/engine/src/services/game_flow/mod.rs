//! Game flow orchestration - drives rounds from the deal to the score.
//!
//! `GameFlow` owns everything that lives between rounds (seat setup, the game
//! seed, cumulative scores, the carried deck order) and the current
//! [`RoundState`]. It provides fine-grained transition methods for human
//! seats and a helper that runs automated seats until a human must act.

mod ai_coordinator;
mod player_actions;
mod round_lifecycle;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::ai::{create_ai, AiConfig, AiPlayer, Difficulty};
use crate::domain::rules::PLAYERS;
use crate::domain::state::Seat;
use crate::domain::{Card, Contract, RoundOutcome, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Who sits in a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatConfig {
    Human,
    Ai(Difficulty),
}

impl SeatConfig {
    pub fn is_human(self) -> bool {
        matches!(self, SeatConfig::Human)
    }
}

/// What one finished round contributed to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub dealer: Seat,
    pub contract: Option<Contract>,
    pub outcome: RoundOutcome,
    pub declarer_tricks: u8,
    pub made: bool,
    pub deltas: [i32; PLAYERS],
    /// Cumulative scores after this round.
    pub totals: [i32; PLAYERS],
}

pub struct GameFlow {
    seats: [SeatConfig; PLAYERS],
    players: [Option<Box<dyn AiPlayer>>; PLAYERS],
    /// Per-seat decision sources, reseeded every round.
    seat_rngs: [StdRng; PLAYERS],
    game_seed: u64,
    starting_dealer: Seat,
    rounds_played: u32,
    carried: Option<Vec<Card>>,
    totals: [i32; PLAYERS],
    round: Option<RoundState>,
    /// Abundance / Grand-Slam declarer who has not named trump yet.
    trump_pending: Option<Seat>,
    history: Vec<RoundSummary>,
}

impl GameFlow {
    /// New game. The seed comes from `config.seed`, or from entropy.
    pub fn new(seats: [SeatConfig; PLAYERS], config: &AiConfig) -> Self {
        let game_seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let players = seats.map(|seat| match seat {
            SeatConfig::Human => None,
            SeatConfig::Ai(difficulty) => Some(create_ai(difficulty, config)),
        });
        Self {
            seats,
            players,
            seat_rngs: std::array::from_fn(|i| StdRng::seed_from_u64(game_seed ^ i as u64)),
            game_seed,
            starting_dealer: 0,
            rounds_played: 0,
            carried: None,
            totals: [0; PLAYERS],
            round: None,
            trump_pending: None,
            history: Vec::new(),
        }
    }

    /// Four automated seats at `difficulty`.
    pub fn all_ai(difficulty: Difficulty, config: &AiConfig) -> Self {
        Self::new([SeatConfig::Ai(difficulty); PLAYERS], config)
    }

    pub fn with_starting_dealer(mut self, dealer: Seat) -> Self {
        self.starting_dealer = dealer % PLAYERS as Seat;
        self
    }

    pub fn seats(&self) -> &[SeatConfig; PLAYERS] {
        &self.seats
    }

    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn totals(&self) -> [i32; PLAYERS] {
        self.totals
    }

    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    pub fn round(&self) -> Option<&RoundState> {
        self.round.as_ref()
    }

    /// Seat that must name trump before the first card, if any.
    pub fn awaiting_trump(&self) -> Option<Seat> {
        self.trump_pending
    }

    /// Seat that must act next: the trump chooser, bidder or player.
    pub fn next_actor(&self) -> Option<Seat> {
        self.trump_pending
            .or_else(|| self.round.as_ref().and_then(RoundState::next_actor))
    }

    fn round_mut(&mut self, ctx: &'static str) -> Result<&mut RoundState, DomainError> {
        self.round.as_mut().ok_or_else(|| {
            DomainError::validation(ValidationKind::PhaseMismatch, format!("{ctx}: no round in progress"))
        })
    }
}
