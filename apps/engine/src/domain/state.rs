use serde::{Deserialize, Serialize};

use crate::domain::bidding::Bid;
use crate::domain::contract::Contract;
use crate::domain::dealing::Deck;
use crate::domain::rules::{PLAYERS, TRICKS_PER_ROUND};
use crate::domain::troel::{self, TroelResult};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3, table position

/// Round progression. `ChoosingAlone` only follows an unanswered Ask.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cards dealt, forced contracts not yet checked.
    Dealing,
    /// Seats bid in turn starting left of the dealer.
    Bidding,
    /// The unanswered asker decides between Alone and Pass.
    ChoosingAlone,
    /// Tricks in progress.
    Playing,
    /// Terminal.
    Completed,
}

/// How a completed round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    AllPassed,
    /// All thirteen tricks were played.
    Played,
    /// A Misery declarer took a trick and the round stopped there.
    MiseryBroken,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    pub seat: Seat,
    pub bid: Bid,
}

/// One card played in a round. `sequence` counts plays across the whole round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayRecord {
    pub seat: Seat,
    pub card: Card,
    pub sequence: u8,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Trick {
    /// 0-based within the round.
    pub index: u8,
    pub leader: Seat,
    pub plays: Vec<PlayRecord>,
    pub winner: Option<Seat>,
}

impl Trick {
    pub fn new(index: u8, leader: Seat) -> Self {
        Self {
            index,
            leader,
            plays: Vec::with_capacity(PLAYERS),
            winner: None,
        }
    }

    pub fn led_suit(&self) -> Option<Suit> {
        self.plays.first().map(|p| p.card.suit)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == PLAYERS
    }

    /// Seat expected to play next, `None` once four cards are down.
    pub fn next_to_act(&self) -> Option<Seat> {
        if self.is_complete() {
            None
        } else {
            Some(expected_actor(self.leader, self.plays.len() as u8))
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        self.plays.iter().map(|p| p.card).collect()
    }
}

/// Everything about one deal, from the cut to the last trick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// 1-based round number within a game.
    pub round_no: u32,
    pub dealer: Seat,
    pub hands: [Vec<Card>; PLAYERS],
    pub trump: Suit,
    /// The card that revealed trump (bottom of the cut deck, or the Troel card).
    pub trump_card: Card,
    pub bids: Vec<BidRecord>,
    pub contract: Option<Contract>,
    pub phase: Phase,
    pub tricks: Vec<Trick>,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// A freshly dealt round in `Dealing`. Call [`RoundState::begin`] to move on.
    pub fn new(round_no: u32, dealer: Seat, hands: [Vec<Card>; PLAYERS], trump_card: Card) -> Self {
        Self {
            round_no,
            dealer,
            hands,
            trump: trump_card.suit,
            trump_card,
            bids: Vec::with_capacity(PLAYERS),
            contract: None,
            phase: Phase::Dealing,
            tricks: Vec::with_capacity(TRICKS_PER_ROUND),
            outcome: None,
        }
    }

    /// Reveal trump from an already cut deck, deal it out and begin the round.
    pub fn from_deck(round_no: u32, dealer: Seat, deck: Deck) -> Result<Self, DomainError> {
        let trump_card = deck
            .trump_card()
            .ok_or_else(|| DomainError::config("cannot reveal trump from an empty deck"))?;
        let hands = deck.deal(dealer)?;
        let mut state = Self::new(round_no, dealer, hands, trump_card);
        state.begin()?;
        Ok(state)
    }

    /// Leave `Dealing`: a forced Troel contract goes straight to `Playing`,
    /// otherwise bidding opens.
    pub fn begin(&mut self) -> Result<Option<TroelResult>, DomainError> {
        require_phase(self, Phase::Dealing, "begin")?;
        require_seat(self.dealer)?;
        match troel::detect_troel(&self.hands) {
            Some(found) => {
                troel::apply(self, &found);
                Ok(Some(found))
            }
            None => {
                self.phase = Phase::Bidding;
                Ok(None)
            }
        }
    }

    pub fn current_trick(&self) -> Option<&Trick> {
        self.tricks.last()
    }

    /// Seat whose bid is expected, in either auction phase.
    pub fn expected_bidder(&self) -> Option<Seat> {
        match self.phase {
            Phase::Bidding if self.bids.len() < PLAYERS => {
                Some(expected_bidder(self.dealer, self.bids.len() as u8))
            }
            Phase::ChoosingAlone => self.asker(),
            _ => None,
        }
    }

    /// Seat whose card is expected while playing.
    pub fn expected_player(&self) -> Option<Seat> {
        if self.phase != Phase::Playing {
            return None;
        }
        self.current_trick().and_then(Trick::next_to_act)
    }

    /// Whoever must act next, bidding or playing.
    pub fn next_actor(&self) -> Option<Seat> {
        self.expected_bidder().or_else(|| self.expected_player())
    }

    /// Seat that bid Ask in this auction, if any.
    pub fn asker(&self) -> Option<Seat> {
        self.bids
            .iter()
            .find(|b| b.bid == Bid::Ask)
            .map(|b| b.seat)
    }

    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks
            .iter()
            .filter(|t| t.winner == Some(seat))
            .count() as u8
    }

    pub fn tricks_won_by(&self, seats: &[Seat]) -> u8 {
        seats.iter().map(|s| self.tricks_won(*s)).sum()
    }

    /// All plays so far, in order.
    pub fn plays(&self) -> impl Iterator<Item = &PlayRecord> {
        self.tricks.iter().flat_map(|t| t.plays.iter())
    }

    pub fn play_count(&self) -> usize {
        self.tricks.iter().map(|t| t.plays.len()).sum()
    }

    /// Card order to carry into the next deal: cards in the order they were
    /// played, then any cards still held, seat by seat.
    pub fn carried_order(&self) -> Vec<Card> {
        let mut order: Vec<Card> = self.plays().map(|p| p.card).collect();
        for hand in &self.hands {
            order.extend(hand.iter().copied());
        }
        order
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub(crate) fn open_trick(&mut self, leader: Seat) {
        let index = self.tricks.len() as u8;
        self.tricks.push(Trick::new(index, leader));
    }

    pub(crate) fn complete(&mut self, outcome: RoundOutcome) {
        self.phase = Phase::Completed;
        self.outcome = Some(outcome);
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

/// Round-start seat (player to the left of the dealer). Leads the first
/// trick unless the contract says otherwise.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_player(dealer)
}

/// Dealer for a 1-based round number; the deal rotates one seat per round.
#[inline]
pub fn dealer_for_round(starting_dealer: Seat, round_no: u32) -> Seat {
    let steps = (round_no.saturating_sub(1) % PLAYERS as u32) as i8;
    seat_offset(starting_dealer, steps)
}

/// Expected bidder seat: left of the dealer, then clockwise by `bid_count`.
#[inline]
pub fn expected_bidder(dealer: Seat, bid_count: u8) -> Seat {
    seat_offset(dealer, 1 + bid_count as i8)
}

/// Expected actor seat during a trick, given its leader and the plays so far.
#[inline]
pub fn expected_actor(leader: Seat, play_count: u8) -> Seat {
    seat_offset(leader, play_count as i8)
}

/// Position relative to the dealer: 0 bids first, 3 is the dealer.
#[inline]
pub fn position_after_dealer(seat: Seat, dealer: Seat) -> u8 {
    seat_offset(seat, -(dealer as i8) - 1)
}

pub fn require_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("seat {seat} out of range"),
        ))
    }
}

pub fn require_phase(state: &RoundState, phase: Phase, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{ctx}: expected {phase:?}, round is in {:?}", state.phase),
        ))
    }
}

pub fn require_contract<'a>(
    state: &'a RoundState,
    ctx: &'static str,
) -> Result<&'a Contract, DomainError> {
    state.contract.as_ref().ok_or_else(|| {
        DomainError::config(format!("Invariant violated: contract must be set ({ctx})"))
    })
}
