//! Live win-probability estimate for each held card.
//!
//! `p = max(0, 1 - (higher_unseen + ruff_threat) / remaining_unseen)`, where
//! `ruff_threat` is the number of unseen trumps scaled by the share of
//! opponents not yet known to be out of trump. Trumps only fear higher
//! trumps. A non-trump Ace is certain once no trump is unseen. A small rank
//! tie-break keeps the ordering strict.

use super::simulation::unseen_cards;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Rank, Seat, SeatVoids, Suit};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOdds {
    pub card: Card,
    pub probability: f64,
}

pub fn card_probabilities(
    hand: &[Card],
    played: &[Card],
    voids: &SeatVoids,
    seat: Seat,
    trump: Suit,
    rank_tiebreak: f64,
) -> Vec<CardOdds> {
    let unseen = unseen_cards(hand, played);
    let remaining = unseen.len();
    let unseen_trumps = unseen.iter().filter(|c| c.suit == trump).count();

    let opponents: Vec<Seat> = (0..PLAYERS as Seat).filter(|s| *s != seat).collect();
    let live = opponents
        .iter()
        .filter(|s| !voids.is_void(**s, trump))
        .count();
    let ruff_threat = if opponents.is_empty() {
        0.0
    } else {
        unseen_trumps as f64 * live as f64 / opponents.len() as f64
    };

    hand.iter()
        .map(|&card| {
            let higher = unseen
                .iter()
                .filter(|c| c.suit == card.suit && c.rank > card.rank)
                .count() as f64;
            let threat = higher + if card.suit == trump { 0.0 } else { ruff_threat };
            let base = if remaining == 0 {
                1.0
            } else {
                (1.0 - threat / remaining as f64).max(0.0)
            };
            let probability = if card.rank == Rank::Ace && unseen_trumps == 0 {
                1.0
            } else {
                base + card.rank.value() as f64 * rank_tiebreak
            };
            CardOdds { card, probability }
        })
        .collect()
}

/// Odds for `card`, if it was in the evaluated hand.
pub fn odds_of(odds: &[CardOdds], card: Card) -> Option<f64> {
    odds.iter().find(|o| o.card == card).map(|o| o.probability)
}
