//! Easy tier: counting thresholds, a little bidding noise, random card play.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use super::config::HeuristicConfig;
use super::features::{longest_suit, HandFeatures};
use super::trait_def::{AiError, AiPlayer};
use super::{chance, misery, Difficulty};
use crate::domain::{Bid, BidContext, Card, PlayContext, Suit};

#[derive(Debug, Clone, Default)]
pub struct EasyPlayer {
    heuristics: HeuristicConfig,
}

impl EasyPlayer {
    pub const NAME: &'static str = "easy";

    pub fn new(heuristics: HeuristicConfig) -> Self {
        Self { heuristics }
    }
}

impl AiPlayer for EasyPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn choose_bid(&self, ctx: &BidContext, rng: &mut dyn RngCore) -> Result<Bid, AiError> {
        if ctx.choosing_alone {
            return self.choose_alone_or_pass(ctx);
        }
        let h = &self.heuristics;
        let f = HandFeatures::new(&ctx.hand, ctx.trump());

        if f.is_open_misery_candidate() && chance(rng, h.easy_open_misery_chance) {
            return Ok(Bid::OpenMisery);
        }
        if f.max_suit_len() >= h.abundance_suit_length {
            return Ok(Bid::Abundance);
        }
        if ctx.open_ask() && f.trumps >= h.easy_join_trumps {
            return Ok(Bid::Join);
        }
        if f.trumps >= h.easy_ask_trumps && f.aces >= h.easy_ask_aces {
            return Ok(Bid::Ask);
        }
        if f.trumps >= h.easy_grand_slam_trumps {
            return Ok(Bid::GrandSlam);
        }
        if chance(rng, h.easy_noise) {
            return Ok(if rng.random_bool(0.5) { Bid::Ask } else { Bid::Pass });
        }
        Ok(Bid::Pass)
    }

    fn choose_alone_or_pass(&self, ctx: &BidContext) -> Result<Bid, AiError> {
        Ok(alone_or_pass(&self.heuristics, ctx))
    }

    fn choose_play(&self, ctx: &PlayContext, rng: &mut dyn RngCore) -> Result<Card, AiError> {
        if ctx.legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        if ctx.is_misery() {
            if let Some(card) = misery::select_card(ctx) {
                return Ok(card);
            }
        }
        ctx.legal
            .choose(rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random card".into()))
    }

    fn choose_trump(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Result<Suit, AiError> {
        Ok(longest_suit(hand))
    }
}

/// Alone with enough trumps or aces, otherwise Pass.
pub(crate) fn alone_or_pass(h: &HeuristicConfig, ctx: &BidContext) -> Bid {
    let f = HandFeatures::new(&ctx.hand, ctx.trump());
    if f.trumps >= h.alone_min_trumps || f.aces >= h.alone_min_aces {
        Bid::Alone
    } else {
        Bid::Pass
    }
}
