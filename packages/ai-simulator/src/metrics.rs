//! Metrics collection for simulated games.

use serde::Serialize;
use wiezen_engine::domain::{Contract, RoundOutcome};
use wiezen_engine::Seat;

use crate::simulator::GameResult;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    pub rounds: Vec<RoundMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    pub total_games: u32,
    pub rounds_per_game: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [i32; 4],
    /// Seats sharing the highest total.
    pub winners: Vec<Seat>,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_no: u32,
    pub dealer: Seat,
    pub contract: Option<Contract>,
    pub outcome: RoundOutcome,
    pub declarer_tricks: u8,
    pub made: bool,
    pub deltas: [i32; 4],
}

/// One CSV line per game.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: u32,
    pub seed: u64,
    pub winner: String,
    pub seat0_score: i32,
    pub seat1_score: i32,
    pub seat2_score: i32,
    pub seat3_score: i32,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(m: &GameMetrics) -> Self {
        let s = m.result.final_scores;
        let ai = &m.config.ai_types;
        Self {
            game_id: m.game_id,
            seed: m.seed,
            winner: m
                .result
                .winners
                .iter()
                .map(|w| w.to_string())
                .collect::<Vec<_>>()
                .join("|"),
            seat0_score: s[0],
            seat1_score: s[1],
            seat2_score: s[2],
            seat3_score: s[3],
            seat0_ai: ai[0].clone(),
            seat1_ai: ai[1].clone(),
            seat2_ai: ai[2].clone(),
            seat3_ai: ai[3].clone(),
        }
    }
}

/// Seats holding the maximum score. Empty only for an empty slice.
pub fn winners(scores: &[i32; 4]) -> Vec<Seat> {
    let Some(&best) = scores.iter().max() else {
        return Vec::new();
    };
    (0..4u8).filter(|&s| scores[s as usize] == best).collect()
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: u32,
    ai_types: [String; 4],
    total_games: u32,
    rounds_per_game: u32,
    result: &GameResult,
    duration_ms: f64,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let rounds = result
        .rounds
        .iter()
        .map(|r| RoundMetrics {
            round_no: r.round_no,
            dealer: r.dealer,
            contract: r.contract,
            outcome: r.outcome,
            declarer_tricks: r.declarer_tricks,
            made: r.made,
            deltas: r.deltas,
        })
        .collect();

    GameMetrics {
        game_id,
        seed: result.seed,
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
            rounds_per_game,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winners: winners(&result.final_scores),
            duration_ms,
        },
        rounds,
    }
}
