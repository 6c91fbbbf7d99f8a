//! Shared types for the simulator.

use clap::ValueEnum;
use wiezen_engine::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Easy,
    Medium,
    Hard,
}

impl AiType {
    pub fn difficulty(self) -> Difficulty {
        match self {
            AiType::Easy => Difficulty::Easy,
            AiType::Medium => Difficulty::Medium,
            AiType::Hard => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Jsonl,
    None,
}
