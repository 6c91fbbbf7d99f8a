//! Whole-game runner on top of the engine's orchestrator.

use wiezen_engine::ai::AiConfig;
use wiezen_engine::{DomainError, GameFlow, RoundSummary, SeatConfig};

const PLAYERS: usize = 4;

/// Everything one simulated game produced.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub seed: u64,
    pub rounds: Vec<RoundSummary>,
    pub final_scores: [i32; PLAYERS],
}

pub struct Simulator {
    seats: [SeatConfig; PLAYERS],
    config: AiConfig,
    rounds: u32,
}

impl Simulator {
    pub fn new(seats: [SeatConfig; PLAYERS], config: AiConfig, rounds: u32) -> Self {
        Self {
            seats,
            config,
            rounds,
        }
    }

    /// Play `rounds` rounds with `seed` as the game seed.
    pub fn simulate_game(&self, seed: u64) -> Result<GameResult, DomainError> {
        let config = AiConfig {
            seed: Some(seed),
            ..self.config.clone()
        };
        let mut flow = GameFlow::new(self.seats, &config);

        for _ in 0..self.rounds {
            flow.start_round()?;
            flow.process_ai_turns()?;
            if !flow.round().is_some_and(|r| r.is_completed()) {
                return Err(DomainError::config(
                    "simulated round stalled waiting for a human seat",
                ));
            }
            flow.finish_round()?;
        }

        Ok(GameResult {
            seed,
            rounds: flow.history().to_vec(),
            final_scores: flow.totals(),
        })
    }
}
