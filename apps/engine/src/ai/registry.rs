//! How to register a tier
//!
//! 1) Implement `AiPlayer` for your type in its module.
//! 2) Add a new `AiFactory` entry to the static list with a stable `name`.
//! 3) Keep ordering stable; avoid side effects in constructors.
//! 4) Determinism: decisions depend only on the context and the caller's RNG.

use super::config::AiConfig;
use super::{AiPlayer, Difficulty, EasyPlayer, HardPlayer, MediumPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub difficulty: Difficulty,
    pub make: fn(config: &AiConfig) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: EasyPlayer::NAME,
        difficulty: Difficulty::Easy,
        make: make_easy,
    },
    AiFactory {
        name: MediumPlayer::NAME,
        difficulty: Difficulty::Medium,
        make: make_medium,
    },
    AiFactory {
        name: HardPlayer::NAME,
        difficulty: Difficulty::Hard,
        make: make_hard,
    },
];

/// Returns the statically registered AI factories.
pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

/// Finds a registered AI factory by its name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais()
        .iter()
        .find(|factory| factory.name.eq_ignore_ascii_case(name))
}

pub fn by_difficulty(difficulty: Difficulty) -> &'static AiFactory {
    match difficulty {
        Difficulty::Easy => &AI_FACTORIES[0],
        Difficulty::Medium => &AI_FACTORIES[1],
        Difficulty::Hard => &AI_FACTORIES[2],
    }
}

fn make_easy(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(EasyPlayer::new(config.heuristics.clone()))
}

fn make_medium(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(MediumPlayer::new(config.heuristics.clone()))
}

fn make_hard(config: &AiConfig) -> Box<dyn AiPlayer> {
    Box::new(HardPlayer::new(config))
}
