//! Monte-Carlo hand evaluation for Hard bidding.
//!
//! Each trial deals the cards the bidder cannot see to the three other seats
//! and counts the bidder's cards that would win an uncontested lead:
//! - a trump wins when no opponent holds a higher trump;
//! - any other card wins when no opponent holds a higher card of its suit and
//!   no opponent out of that suit holds a trump to ruff it.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::trace;

use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Deck, Rank, Suit};

/// Every card not in `hand` and not in `seen`, in deck order.
pub fn unseen_cards(hand: &[Card], seen: &[Card]) -> Vec<Card> {
    Deck::full()
        .cards()
        .iter()
        .copied()
        .filter(|c| !hand.contains(c) && !seen.contains(c))
        .collect()
}

/// What one opponent holds, reduced to the facts the win rule needs.
#[derive(Debug, Default, Clone, Copy)]
struct OpponentShape {
    top: [Option<Rank>; 4],
}

impl OpponentShape {
    fn of(cards: &[Card]) -> Self {
        let mut shape = Self::default();
        for card in cards {
            let slot = &mut shape.top[card.suit.index()];
            if slot.is_none_or(|r| card.rank > r) {
                *slot = Some(card.rank);
            }
        }
        shape
    }

    fn holds(&self, suit: Suit) -> bool {
        self.top[suit.index()].is_some()
    }

    fn beats(&self, card: Card) -> bool {
        self.top[card.suit.index()].is_some_and(|r| r > card.rank)
    }
}

fn sure_winners(hand: &[Card], opponents: &[OpponentShape], trump: Suit) -> usize {
    hand.iter()
        .filter(|card| {
            opponents.iter().all(|opp| {
                if opp.beats(**card) {
                    return false;
                }
                card.suit == trump || opp.holds(card.suit) || !opp.holds(trump)
            })
        })
        .count()
}

/// Average number of uncontested winners in `hand` with `trump`, over
/// `trials` random deals of the unseen cards (at least one).
pub fn expected_tricks<R: Rng + ?Sized>(
    hand: &[Card],
    trump: Suit,
    trials: usize,
    rng: &mut R,
) -> f64 {
    let trials = trials.max(1);
    let mut unseen = unseen_cards(hand, &[]);
    let per_seat = unseen.len().div_ceil(PLAYERS - 1).max(1);
    let mut total = 0usize;

    for _ in 0..trials {
        unseen.shuffle(rng);
        let opponents: Vec<OpponentShape> =
            unseen.chunks(per_seat).map(OpponentShape::of).collect();
        total += sure_winners(hand, &opponents, trump);
    }

    let expected = total as f64 / trials as f64;
    trace!(%trump, trials, expected, "simulated hand");
    expected
}

/// Expected tricks for every suit as trump, indexed by `Suit::index()`.
pub fn expected_tricks_per_suit<R: Rng + ?Sized>(
    hand: &[Card],
    trials: usize,
    rng: &mut R,
) -> [f64; 4] {
    let mut out = [0.0; 4];
    for suit in Suit::ALL {
        out[suit.index()] = expected_tricks(hand, suit, trials, rng);
    }
    out
}
