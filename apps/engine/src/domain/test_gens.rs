// Proptest generators for domain types.
// These generators ensure unique cards and valid round states for property-based testing.

use proptest::prelude::*;

use crate::domain::state::{PlayRecord, Seat};
use crate::domain::{Bid, Card, Rank, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

/// Generate a random Rank
pub fn rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ALL.to_vec())
}

/// Generate a single Card
pub fn card() -> impl Strategy<Value = Card> {
    (suit(), rank()).prop_map(|(suit, rank)| Card { suit, rank })
}

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                all_cards.push(Card { suit, rank });
            }
        }
        // Shuffle and take first N
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a hand (vector of 1-13 unique cards)
pub fn hand() -> impl Strategy<Value = Vec<Card>> {
    (1usize..=13).prop_flat_map(unique_cards)
}

/// Generate a Seat (0-3)
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..=3u8
}

/// Any bid, including ones that are illegal in context.
pub fn bid() -> impl Strategy<Value = Bid> {
    prop::sample::select(Bid::ALL.to_vec())
}

/// Four full 13-card hands partitioning the deck.
pub fn full_deal() -> impl Strategy<Value = [Vec<Card>; 4]> {
    unique_cards(52).prop_map(|cards| {
        let mut hands: [Vec<Card>; 4] = Default::default();
        for (i, card) in cards.into_iter().enumerate() {
            hands[i / 13].push(card);
        }
        for hand in hands.iter_mut() {
            hand.sort();
        }
        hands
    })
}

/// Complete trick: 4 unique cards with seats in play order.
/// Returns (plays, trump)
pub fn complete_trick() -> impl Strategy<Value = (Vec<PlayRecord>, Suit)> {
    (seat(), unique_cards(4), suit()).prop_map(|(leader, cards, trump)| {
        let plays = cards
            .into_iter()
            .enumerate()
            .map(|(i, card)| PlayRecord {
                seat: (leader + i as u8) % 4,
                card,
                sequence: i as u8,
            })
            .collect();
        (plays, trump)
    })
}

/// Generate a hand containing NO cards of the given suit
pub fn hand_without_suit(excluded_suit: Suit) -> impl Strategy<Value = Vec<Card>> {
    Just(()).prop_perturb(move |_, mut rng| {
        let mut cards: Vec<Card> = Suit::ALL
            .into_iter()
            .filter(|&s| s != excluded_suit)
            .flat_map(|suit| Rank::ALL.into_iter().map(move |rank| Card { suit, rank }))
            .collect();

        let count = rng.random_range(1..=13);
        for i in 0..count {
            let j = rng.random_range(i..cards.len());
            cards.swap(i, j);
        }
        cards.truncate(count);
        cards
    })
}
