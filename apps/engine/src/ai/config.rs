//! AI configuration handling.
//!
//! Every threshold the decision engine uses is a named field here rather than
//! a literal in the tier code, so tuning never touches the rules.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::Difficulty;
use crate::domain::Rank;

/// Standard configuration for automated seats.
///
/// # Example JSON Config
///
/// ```json
/// {
///   "seed": 12345,
///   "difficulty": "hard",
///   "mc_trials": 128,
///   "heuristics": { "signal_ranks": [9, 10] }
/// }
/// ```
///
/// Missing fields take their defaults; malformed input yields the default
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Optional game seed for reproducible dealing and decisions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub difficulty: Difficulty,
    /// Monte-Carlo deals per candidate trump suit in Hard bidding.
    pub mc_trials: usize,
    pub heuristics: HeuristicConfig,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            difficulty: Difficulty::Medium,
            mc_trials: 64,
            heuristics: HeuristicConfig::default(),
        }
    }
}

impl AiConfig {
    /// Create an AiConfig from an optional JSON value, falling back to the
    /// defaults when the value is absent or does not deserialize.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_default(),
            None => Self::default(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Trial count, never zero.
    pub fn trials(&self) -> usize {
        self.mc_trials.max(1)
    }
}

/// Tunable heuristic constants. None of these are game rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    // Shared bidding shape
    pub abundance_suit_length: usize,
    pub alone_min_trumps: usize,
    pub alone_min_aces: usize,

    // Easy
    pub easy_noise: f64,
    pub easy_open_misery_chance: f64,
    pub easy_join_trumps: usize,
    pub easy_ask_trumps: usize,
    pub easy_ask_aces: usize,
    pub easy_grand_slam_trumps: usize,

    // Medium
    pub medium_open_misery_chance: f64,
    pub medium_misery_chance: f64,
    pub medium_grand_slam_trumps: usize,
    pub medium_grand_slam_aces: usize,
    pub medium_join_trumps: usize,
    pub medium_join_aces: usize,
    pub medium_ask_trumps: usize,
    pub medium_ask_high_cards: usize,

    // Hard bidding, in expected tricks
    pub hard_open_misery_chance: f64,
    pub hard_grand_slam_tricks: f64,
    pub hard_abundance_tricks: f64,
    pub hard_misery_tricks: f64,
    pub hard_misery_max_high_cards: usize,
    pub hard_misery_min_low_cards: usize,
    pub hard_join_tricks: f64,
    pub hard_ask_tricks: f64,

    // Hard play
    /// Discarding one of these ranks off-suit asks the partner for that suit.
    pub signal_ranks: Vec<u8>,
    /// Lead a card on its own strength only above this win probability.
    pub lead_probability: f64,
    /// Finesse only while fewer than this many cards are on the table.
    pub finesse_max_played: usize,
    /// Weight of the rank tie-break added to every probability.
    pub rank_tiebreak: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            abundance_suit_length: 8,
            alone_min_trumps: 5,
            alone_min_aces: 3,

            easy_noise: 0.10,
            easy_open_misery_chance: 0.05,
            easy_join_trumps: 3,
            easy_ask_trumps: 6,
            easy_ask_aces: 1,
            easy_grand_slam_trumps: 11,

            medium_open_misery_chance: 0.10,
            medium_misery_chance: 0.05,
            medium_grand_slam_trumps: 10,
            medium_grand_slam_aces: 3,
            medium_join_trumps: 4,
            medium_join_aces: 2,
            medium_ask_trumps: 5,
            medium_ask_high_cards: 5,

            hard_open_misery_chance: 0.20,
            hard_grand_slam_tricks: 12.5,
            hard_abundance_tricks: 9.0,
            hard_misery_tricks: 0.5,
            hard_misery_max_high_cards: 1,
            hard_misery_min_low_cards: 8,
            hard_join_tricks: 3.0,
            hard_ask_tricks: 4.0,

            signal_ranks: vec![8, 9, 10],
            lead_probability: 0.5,
            finesse_max_played: 3,
            rank_tiebreak: 0.001,
        }
    }
}

impl HeuristicConfig {
    /// Configured signal ranks; unknown values are ignored.
    pub fn signal_ranks(&self) -> Vec<Rank> {
        self.signal_ranks
            .iter()
            .filter_map(|v| Rank::from_value(*v))
            .collect()
    }
}
