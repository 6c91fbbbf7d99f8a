//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Does `a` beat `b` in a trick led with `lead` under `trump`?
///
/// Trump beats any non-trump; between two trumps or two lead-suit cards the
/// higher rank wins; a card that is neither trump nor lead suit never wins.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Suit) -> bool {
    let a_trump = a.suit == trump;
    let b_trump = b.suit == trump;
    if a_trump && !b_trump {
        return true;
    }
    if b_trump && !a_trump {
        return false;
    }
    if a_trump && b_trump {
        return a.rank > b.rank;
    }
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.rank > b.rank;
    }
    false
}

/// Index into `plays` of the card currently winning. `None` for an empty slice.
pub fn winning_index(plays: &[Card], trump: Suit) -> Option<usize> {
    let lead = plays.first()?.suit;
    let mut best = 0;
    for (i, &card) in plays.iter().enumerate().skip(1) {
        if card_beats(card, plays[best], lead, trump) {
            best = i;
        }
    }
    Some(best)
}

/// Lowest-ranked card of a slice (first one on ties).
pub fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| c.rank)
}

/// Highest-ranked card of a slice.
pub fn highest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().max_by_key(|c| c.rank)
}

pub fn count_suit(hand: &[Card], suit: Suit) -> usize {
    hand.iter().filter(|c| c.suit == suit).count()
}
