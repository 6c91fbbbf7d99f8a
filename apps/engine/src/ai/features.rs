//! Hand features shared by every bidding tier.

use crate::domain::cards_logic::count_suit;
use crate::domain::{Card, Rank, Suit};

/// Counts a bidder derives from a hand and a candidate trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandFeatures {
    pub trumps: usize,
    pub aces: usize,
    /// Aces, Kings and Queens.
    pub high_cards: usize,
    /// Two through Five.
    pub low_cards: usize,
    /// Indexed by `Suit::index()`.
    pub suit_lengths: [usize; 4],
}

impl HandFeatures {
    pub fn new(hand: &[Card], trump: Suit) -> Self {
        let mut suit_lengths = [0; 4];
        for suit in Suit::ALL {
            suit_lengths[suit.index()] = count_suit(hand, suit);
        }
        Self {
            trumps: count_suit(hand, trump),
            aces: hand.iter().filter(|c| c.rank == Rank::Ace).count(),
            high_cards: hand.iter().filter(|c| c.rank >= Rank::Queen).count(),
            low_cards: hand.iter().filter(|c| c.rank <= Rank::Five).count(),
            suit_lengths,
        }
    }

    pub fn max_suit_len(&self) -> usize {
        self.suit_lengths.iter().copied().max().unwrap_or(0)
    }

    /// No honours, at most one trump and nine or more low cards.
    pub fn is_open_misery_candidate(&self) -> bool {
        self.high_cards == 0 && self.trumps <= 1 && self.low_cards >= 9
    }
}

/// Longest suit in `hand`; ties go to the suit holding more high cards, then
/// to `Suit::ALL` order.
pub fn longest_suit(hand: &[Card]) -> Suit {
    let mut best = Suit::ALL[0];
    let mut best_key = (0, 0);
    for suit in Suit::ALL {
        let key = (
            count_suit(hand, suit),
            hand.iter()
                .filter(|c| c.suit == suit && c.rank >= Rank::Queen)
                .count(),
        );
        if key > best_key {
            best = suit;
            best_key = key;
        }
    }
    best
}
