//! Medium tier: tighter bidding thresholds and economical card play.
//!
//! Play wins with the cheapest card that beats the current winner, ducks low
//! otherwise, and never spends a trump that cannot take the trick.

use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};

use super::config::HeuristicConfig;
use super::easy::alone_or_pass;
use super::features::{longest_suit, HandFeatures};
use super::trait_def::{AiError, AiPlayer};
use super::{chance, misery, Difficulty};
use crate::domain::cards_logic::{hand_has_suit, lowest};
use crate::domain::{Bid, BidContext, Card, PlayContext, Rank, Suit};

#[derive(Debug, Clone, Default)]
pub struct MediumPlayer {
    heuristics: HeuristicConfig,
}

impl MediumPlayer {
    pub const NAME: &'static str = "medium";

    pub fn new(heuristics: HeuristicConfig) -> Self {
        Self { heuristics }
    }
}

impl AiPlayer for MediumPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn choose_bid(&self, ctx: &BidContext, rng: &mut dyn RngCore) -> Result<Bid, AiError> {
        if ctx.choosing_alone {
            return self.choose_alone_or_pass(ctx);
        }
        Ok(medium_bid(&self.heuristics, ctx, rng))
    }

    fn choose_alone_or_pass(&self, ctx: &BidContext) -> Result<Bid, AiError> {
        Ok(alone_or_pass(&self.heuristics, ctx))
    }

    fn choose_play(&self, ctx: &PlayContext, rng: &mut dyn RngCore) -> Result<Card, AiError> {
        if ctx.legal.is_empty() {
            return Err(AiError::InvalidMove("No legal plays available".into()));
        }
        let card = if ctx.is_misery() {
            misery::select_card(ctx)
        } else {
            select_card(ctx, rng)
        };
        card.ok_or_else(|| AiError::Internal("no card selected".into()))
    }

    fn choose_trump(&self, hand: &[Card], _rng: &mut dyn RngCore) -> Result<Suit, AiError> {
        Ok(longest_suit(hand))
    }
}

fn medium_bid<R: Rng + ?Sized>(h: &HeuristicConfig, ctx: &BidContext, rng: &mut R) -> Bid {
    let f = HandFeatures::new(&ctx.hand, ctx.trump());

    if f.is_open_misery_candidate() && chance(rng, h.medium_open_misery_chance) {
        return Bid::OpenMisery;
    }
    if f.max_suit_len() >= h.abundance_suit_length {
        return Bid::Abundance;
    }
    if f.trumps >= h.medium_grand_slam_trumps && f.aces >= h.medium_grand_slam_aces {
        return Bid::GrandSlam;
    }
    if ctx.open_ask() && (f.trumps >= h.medium_join_trumps || f.aces >= h.medium_join_aces) {
        return Bid::Join;
    }
    if f.trumps >= h.medium_ask_trumps && f.high_cards >= h.medium_ask_high_cards {
        return Bid::Ask;
    }
    if f.high_cards == 0 && chance(rng, h.medium_misery_chance) {
        return Bid::Misery;
    }
    Bid::Pass
}

/// Medium card choice for a non-Misery contract. Also the fallback for Hard.
pub(crate) fn select_card<R: Rng + ?Sized>(ctx: &PlayContext, rng: &mut R) -> Option<Card> {
    let legal = &ctx.legal;
    let Some(led) = ctx.led_suit else {
        return lead_card(legal, rng);
    };

    if hand_has_suit(&ctx.hand, led) {
        if ctx.partner_winning() {
            return lowest(legal);
        }
        let winners: Vec<Card> = legal.iter().copied().filter(|c| ctx.beats_current(*c)).collect();
        return lowest(&winners).or_else(|| lowest(legal));
    }

    if !ctx.partner_winning() {
        let ruffs: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|c| c.suit == ctx.trump && ctx.beats_current(*c))
            .collect();
        if let Some(card) = lowest(&ruffs) {
            return Some(card);
        }
    }
    discard(legal, ctx.trump)
}

fn lead_card<R: Rng + ?Sized>(legal: &[Card], rng: &mut R) -> Option<Card> {
    for rank in [Rank::Ace, Rank::King] {
        let tops: Vec<Card> = legal.iter().copied().filter(|c| c.rank == rank).collect();
        if let Some(card) = tops.choose(rng) {
            return Some(*card);
        }
    }
    legal.choose(rng).copied()
}

/// Lowest non-trump, or the lowest card when only trumps remain.
pub(crate) fn discard(legal: &[Card], trump: Suit) -> Option<Card> {
    let side: Vec<Card> = legal.iter().copied().filter(|c| c.suit != trump).collect();
    lowest(&side).or_else(|| lowest(legal))
}
