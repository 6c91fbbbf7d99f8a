//! What the table has seen so far in a round.
//!
//! Built from the normalised `{seat, card, sequence}` play log, this answers
//! the questions the decision engine asks: which cards are gone, which seats
//! have shown out of a suit, and which suits a partner has signalled.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};
use super::rules::PLAYERS;
use super::state::{PlayRecord, RoundState, Seat};

/// Suits each seat is known to be out of.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatVoids([[bool; 4]; PLAYERS]);

impl SeatVoids {
    pub fn mark(&mut self, seat: Seat, suit: Suit) {
        if let Some(row) = self.0.get_mut(seat as usize) {
            row[suit.index()] = true;
        }
    }

    pub fn is_void(&self, seat: Seat, suit: Suit) -> bool {
        self.0
            .get(seat as usize)
            .is_some_and(|row| row[suit.index()])
    }

    /// Suits `seat` has shown out of.
    pub fn suits_of(&self, seat: Seat) -> Vec<Suit> {
        Suit::ALL
            .into_iter()
            .filter(|s| self.is_void(seat, *s))
            .collect()
    }

    /// Seats known to be out of `suit`.
    pub fn seats_void_in(&self, suit: Suit) -> Vec<Seat> {
        (0..PLAYERS as Seat)
            .filter(|seat| self.is_void(*seat, suit))
            .collect()
    }
}

/// Ordered play log for one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundMemory {
    /// Plays in sequence order, grouped by trick (4 per trick, last may be partial).
    pub plays: Vec<PlayRecord>,
}

impl RoundMemory {
    pub fn new(plays: Vec<PlayRecord>) -> Self {
        Self { plays }
    }

    pub fn from_round(state: &RoundState) -> Self {
        Self::new(state.plays().copied().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn played_cards(&self) -> Vec<Card> {
        self.plays.iter().map(|p| p.card).collect()
    }

    /// Plays split into tricks of up to four.
    pub fn tricks(&self) -> impl Iterator<Item = &[PlayRecord]> {
        self.plays.chunks(PLAYERS)
    }

    /// A seat is void in the led suit once it failed to follow it.
    pub fn known_voids(&self) -> SeatVoids {
        let mut voids = SeatVoids::default();
        for trick in self.tricks() {
            let Some(lead) = trick.first().map(|p| p.card.suit) else {
                continue;
            };
            for play in &trick[1..] {
                if play.card.suit != lead {
                    voids.mark(play.seat, lead);
                }
            }
        }
        voids
    }

    /// Suits a partner asked for by discarding a signal-rank card of that suit
    /// while out of the led suit. Most recent signal first, no repeats.
    pub fn suit_signals(&self, partners: &[Seat], signal_ranks: &[Rank], trump: Suit) -> Vec<Suit> {
        let mut signals = Vec::new();
        for trick in self.tricks() {
            let Some(lead) = trick.first().map(|p| p.card.suit) else {
                continue;
            };
            for play in &trick[1..] {
                let card = play.card;
                if partners.contains(&play.seat)
                    && card.suit != lead
                    && card.suit != trump
                    && signal_ranks.contains(&card.rank)
                {
                    signals.retain(|s| *s != card.suit);
                    signals.insert(0, card.suit);
                }
            }
        }
        signals
    }
}
