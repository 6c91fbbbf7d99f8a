//! Decision engine - automated bidding and card play.
//!
//! This module provides:
//! - the [`AiPlayer`] trait every tier implements
//! - Easy, Medium and Hard tiers, differing only in sophistication
//! - hand features, Monte-Carlo evaluation and win-probability helpers
//! - a name-keyed registry and JSON-backed configuration

pub mod config;
mod easy;
pub mod features;
mod hard;
mod medium;
pub mod misery;
pub mod probability;
pub mod registry;
pub mod simulation;
mod trait_def;

use std::fmt;
use std::str::FromStr;

pub use config::{AiConfig, HeuristicConfig};
pub use easy::EasyPlayer;
pub use hard::HardPlayer;
pub use medium::MediumPlayer;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

use crate::errors::domain::DomainError;

/// Decision engine tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => EasyPlayer::NAME,
            Difficulty::Medium => MediumPlayer::NAME,
            Difficulty::Hard => HardPlayer::NAME,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        registry::by_name(s.trim())
            .map(|factory| factory.difficulty)
            .ok_or_else(|| DomainError::config(format!("unknown difficulty '{s}'")))
    }
}

/// Build the player for `difficulty` with the given configuration.
pub fn create_ai(difficulty: Difficulty, config: &AiConfig) -> Box<dyn AiPlayer> {
    (registry::by_difficulty(difficulty).make)(config)
}

/// Build the player for the tier named in `config.difficulty`.
pub fn create_ai_from_config(config: &AiConfig) -> Box<dyn AiPlayer> {
    create_ai(config.difficulty, config)
}

/// Create an AI player from a tier name and optional JSON config.
///
/// Returns None if the name is unrecognized.
pub fn create_ai_by_name(name: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let config = AiConfig::from_json(config);
    registry::by_name(name).map(|factory| (factory.make)(&config))
}

/// True with probability `p`; non-positive or NaN `p` never fires.
pub(crate) fn chance<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    p > 0.0 && rng.random::<f64>() < p
}
