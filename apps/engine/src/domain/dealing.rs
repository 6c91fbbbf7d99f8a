//! The 52-card deck: shuffle, cut ("aflangen"), trump reveal and 4-4-5 dealing.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::rules::{DEAL_BATCHES, DECK_SIZE, PLAYERS};
use super::state::{seat_offset, Seat};
use crate::domain::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Ordered deck. Cards are dealt from the end (`last()` is the next card out).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

/// Generate a full 52-card deck in standard order.
fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

impl Deck {
    pub fn full() -> Self {
        Self { cards: full_deck() }
    }

    /// Rebuild a deck from a carried card order. The order must be exactly the
    /// 52 distinct cards.
    pub fn from_order(order: Vec<Card>) -> Result<Self, DomainError> {
        if order.len() != DECK_SIZE {
            return Err(DomainError::config(format!(
                "carried deck has {} cards, expected {DECK_SIZE}",
                order.len()
            )));
        }
        let mut seen = [[false; 13]; 4];
        for card in &order {
            let slot = &mut seen[card.suit.index()][(card.rank.value() - 2) as usize];
            if *slot {
                return Err(DomainError::config(format!("carried deck repeats {card}")));
            }
            *slot = true;
        }
        Ok(Self { cards: order })
    }

    /// Next round's deck from the previous round's play order, falling back to
    /// a freshly shuffled deck if the carried order is missing or invalid.
    pub fn from_played<R: Rng + ?Sized>(order: Option<Vec<Card>>, rng: &mut R) -> Self {
        match order.map(Self::from_order) {
            Some(Ok(deck)) => deck,
            Some(Err(err)) => {
                debug!(error = %err, "discarding carried deck order");
                Self::shuffled(rng)
            }
            None => Self::shuffled(rng),
        }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::full();
        deck.shuffle(rng);
        deck
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Cut at a random point: the cards from the cut point move to the front.
    pub fn cut<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        if self.cards.is_empty() {
            return 0;
        }
        let point = rng.random_range(0..self.cards.len());
        self.cut_at(point);
        point
    }

    pub fn cut_at(&mut self, point: usize) {
        if point < self.cards.len() {
            self.cards.rotate_left(point);
        }
    }

    /// The trump-revealing card: the bottom card, which is also the first dealt.
    pub fn trump_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Deal the whole deck in 4-4-5 batches, starting with the seat after the
    /// dealer. Returns the hands indexed by seat, each sorted.
    pub fn deal(mut self, dealer: Seat) -> Result<[Vec<Card>; PLAYERS], DomainError> {
        if dealer as usize >= PLAYERS {
            return Err(DomainError::validation(
                ValidationKind::InvalidSeat,
                format!("dealer seat {dealer} out of range"),
            ));
        }
        if self.cards.len() != DECK_SIZE {
            return Err(DomainError::config(format!(
                "cannot deal from a deck of {} cards",
                self.cards.len()
            )));
        }

        let mut hands: [Vec<Card>; PLAYERS] = Default::default();
        for amount in DEAL_BATCHES {
            for offset in 1..=PLAYERS as i8 {
                let seat = seat_offset(dealer, offset);
                for _ in 0..amount {
                    let card = self.cards.pop().ok_or_else(|| {
                        DomainError::config("deck exhausted while dealing")
                    })?;
                    hands[seat as usize].push(card);
                }
            }
        }
        for hand in hands.iter_mut() {
            hand.sort();
        }
        Ok(hands)
    }
}
