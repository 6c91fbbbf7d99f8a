//! Hard tier: Monte-Carlo bidding and inference-driven card play.
//!
//! Play keeps a win-probability estimate for every held card, tracks which
//! seats have shown out of a suit and reads partner discards as suit
//! requests. If the round memory it is handed does not add up, the seat
//! plays the Medium heuristic instead of failing.

use std::collections::HashSet;

use rand::{Rng, RngCore};
use tracing::warn;

use super::config::{AiConfig, HeuristicConfig};
use super::easy::alone_or_pass;
use super::features::{longest_suit, HandFeatures};
use super::probability::{card_probabilities, CardOdds};
use super::simulation::expected_tricks_per_suit;
use super::trait_def::{AiError, AiPlayer};
use super::{chance, medium, misery, Difficulty};
use crate::domain::cards_logic::{hand_has_suit, highest, lowest};
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::{Bid, BidContext, Card, PlayContext, Rank, Seat, SeatVoids, Suit};

#[derive(Debug, Clone)]
pub struct HardPlayer {
    heuristics: HeuristicConfig,
    trials: usize,
}

impl Default for HardPlayer {
    fn default() -> Self {
        Self::new(&AiConfig::default())
    }
}

impl HardPlayer {
    pub const NAME: &'static str = "hard";

    pub fn new(config: &AiConfig) -> Self {
        Self {
            heuristics: config.heuristics.clone(),
            trials: config.trials(),
        }
    }
}

impl AiPlayer for HardPlayer {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }

    fn choose_bid(&self, ctx: &BidContext, rng: &mut dyn RngCore) -> Result<Bid, AiError> {
        if ctx.choosing_alone {
            return self.choose_alone_or_pass(ctx);
        }
        Ok(hard_bid(&self.heuristics, self.trials, ctx, rng))
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
            match check_inference(ctx) {
                Ok(()) => select_card(&self.heuristics, ctx),
                Err(err) => {
                    warn!(seat = ctx.seat, error = %err, "hard play falling back to medium");
                    medium::select_card(ctx, rng)
                }
            }
        };
        card.ok_or_else(|| AiError::Internal("no card selected".into()))
    }

    /// Suit with the best simulated trick count.
    fn choose_trump(&self, hand: &[Card], rng: &mut dyn RngCore) -> Result<Suit, AiError> {
        let per_suit = expected_tricks_per_suit(hand, self.trials, rng);
        let mut best = longest_suit(hand);
        for suit in Suit::ALL {
            if per_suit[suit.index()] > per_suit[best.index()] {
                best = suit;
            }
        }
        Ok(best)
    }
}

fn hard_bid<R: Rng + ?Sized>(
    h: &HeuristicConfig,
    trials: usize,
    ctx: &BidContext,
    rng: &mut R,
) -> Bid {
    let f = HandFeatures::new(&ctx.hand, ctx.trump());
    if f.is_open_misery_candidate() && chance(rng, h.hard_open_misery_chance) {
        return Bid::OpenMisery;
    }

    let per_suit = expected_tricks_per_suit(&ctx.hand, trials, rng);
    let best = per_suit.iter().copied().fold(0.0, f64::max);
    if best >= h.hard_grand_slam_tricks {
        return Bid::GrandSlam;
    }
    if best >= h.hard_abundance_tricks {
        return Bid::Abundance;
    }
    if per_suit.iter().all(|e| *e <= h.hard_misery_tricks)
        && f.high_cards <= h.hard_misery_max_high_cards
        && f.low_cards >= h.hard_misery_min_low_cards
    {
        return Bid::Misery;
    }

    let with_turned_trump = per_suit[ctx.trump().index()];
    if ctx.open_ask() && with_turned_trump >= h.hard_join_tricks {
        return Bid::Join;
    }
    let asked = ctx.prior_bids.iter().any(|b| b.bid == Bid::Ask);
    if !asked && with_turned_trump >= h.hard_ask_tricks {
        return Bid::Ask;
    }
    Bid::Pass
}

/// Reject round memory that cannot describe a real round.
fn check_inference(ctx: &PlayContext) -> Result<(), AiError> {
    let bad = |msg: String| Err(AiError::Internal(msg));

    if ctx.seat as usize >= PLAYERS {
        return bad(format!("seat {} out of range", ctx.seat));
    }
    let mut seen = HashSet::new();
    for play in &ctx.memory.plays {
        if play.seat as usize >= PLAYERS {
            return bad(format!("play by unknown seat {}", play.seat));
        }
        if !seen.insert(play.card) {
            return bad(format!("{} played twice", play.card));
        }
        if ctx.hand.contains(&play.card) {
            return bad(format!("{} both held and played", play.card));
        }
    }
    if ctx.memory.len() + ctx.hand.len() > DECK_SIZE {
        return bad("more cards than the deck holds".into());
    }
    if !ctx.memory.plays.ends_with(&ctx.current_trick) {
        return bad("open trick missing from round memory".into());
    }
    for suit in ctx.known_voids().suits_of(ctx.seat) {
        if hand_has_suit(&ctx.hand, suit) {
            return bad(format!("marked void in {suit} while holding it"));
        }
    }
    if let Some(card) = ctx.legal.iter().find(|c| !ctx.hand.contains(c)) {
        return bad(format!("legal card {card} not in hand"));
    }
    Ok(())
}

fn select_card(h: &HeuristicConfig, ctx: &PlayContext) -> Option<Card> {
    let voids = ctx.known_voids();
    let odds = card_probabilities(
        &ctx.legal,
        &ctx.played_cards(),
        &voids,
        ctx.seat,
        ctx.trump,
        h.rank_tiebreak,
    );
    match ctx.led_suit {
        None => lead(h, ctx, &voids, &odds),
        Some(led) if hand_has_suit(&ctx.hand, led) => follow(h, ctx),
        Some(_) => void_play(h, ctx),
    }
}

fn in_suit(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.suit == suit).collect()
}

/// Trumps the defence may still hold. Zero once every opponent has shown
/// out of trump; otherwise every unseen trump counts.
fn outstanding_trumps(ctx: &PlayContext, voids: &SeatVoids) -> usize {
    let defence_out = (0..PLAYERS as Seat)
        .filter(|s| *s != ctx.seat && !ctx.partner_ids.contains(s))
        .all(|s| voids.is_void(s, ctx.trump));
    if defence_out {
        return 0;
    }
    let gone = ctx
        .played_cards()
        .iter()
        .chain(ctx.hand.iter())
        .filter(|c| c.suit == ctx.trump)
        .count();
    Rank::ALL.len().saturating_sub(gone)
}

fn lead(h: &HeuristicConfig, ctx: &PlayContext, voids: &SeatVoids, odds: &[CardOdds]) -> Option<Card> {
    let legal = &ctx.legal;

    // A partner asked for this suit.
    let signals = ctx
        .memory
        .suit_signals(&ctx.partner_ids, &h.signal_ranks(), ctx.trump);
    for suit in signals {
        if let Some(card) = lowest(&in_suit(legal, suit)) {
            return Some(card);
        }
    }

    let trumps = in_suit(legal, ctx.trump);
    let candidates: Vec<Card> = if ctx.is_declaring() {
        // Draw trumps while the defence still holds some.
        if outstanding_trumps(ctx, voids) > 0 {
            if let Some(card) = highest(&trumps) {
                return Some(card);
            }
        }
        legal.clone()
    } else {
        let side: Vec<Card> = legal.iter().copied().filter(|c| c.suit != ctx.trump).collect();
        if side.is_empty() {
            legal.clone()
        } else {
            side
        }
    };

    if !ctx.is_declaring() {
        // Force a declaring seat that is out of a suit to spend a trump.
        for declarer in ctx.contract.declarers() {
            if voids.is_void(declarer, ctx.trump) {
                continue;
            }
            for suit in voids.suits_of(declarer) {
                if let Some(card) = lowest(&in_suit(&candidates, suit)) {
                    return Some(card);
                }
            }
        }
    }

    let best = odds
        .iter()
        .filter(|o| candidates.contains(&o.card))
        .max_by(|a, b| a.probability.total_cmp(&b.probability));
    if let Some(best) = best {
        if best.probability >= h.lead_probability {
            return Some(best.card);
        }
    }
    let suit = longest_suit(&candidates);
    lowest(&in_suit(&candidates, suit)).or_else(|| lowest(&candidates))
}

/// A partner still plays after this seat in the open trick.
fn partner_to_come(ctx: &PlayContext) -> bool {
    (1..=ctx.players_after()).any(|k| {
        let seat = ((ctx.seat as usize + k) % PLAYERS) as Seat;
        ctx.partner_ids.contains(&seat)
    })
}

fn follow(h: &HeuristicConfig, ctx: &PlayContext) -> Option<Card> {
    let legal = &ctx.legal;
    if ctx.partner_winning() {
        return lowest(legal);
    }
    let winners: Vec<Card> = legal.iter().copied().filter(|c| ctx.beats_current(*c)).collect();
    let top_winner = highest(&winners);

    // Finesse: leave the trick to a partner rather than spend a non-Ace.
    if ctx.current_trick.len() < h.finesse_max_played
        && partner_to_come(ctx)
        && top_winner.is_some_and(|c| c.rank != Rank::Ace)
    {
        return lowest(legal);
    }
    lowest(&winners).or_else(|| lowest(legal))
}

fn void_play(h: &HeuristicConfig, ctx: &PlayContext) -> Option<Card> {
    let legal = &ctx.legal;
    if !ctx.partner_winning() {
        let ruffs: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|c| c.suit == ctx.trump && ctx.beats_current(*c))
            .collect();
        if let Some(card) = lowest(&ruffs) {
            return Some(card);
        }
    } else {
        // Signal a suit headed by our Ace.
        let signal_ranks = h.signal_ranks();
        for suit in Suit::ALL.into_iter().filter(|s| *s != ctx.trump) {
            let cards = in_suit(legal, suit);
            if !cards.iter().any(|c| c.rank == Rank::Ace) {
                continue;
            }
            if let Some(card) = cards.iter().find(|c| signal_ranks.contains(&c.rank)) {
                return Some(*card);
            }
        }
    }
    medium::discard(legal, ctx.trump)
}
