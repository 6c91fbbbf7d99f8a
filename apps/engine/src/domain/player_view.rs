//! Player view of a round - what one seat is allowed to see at a decision point.
//!
//! [`BidContext`] and [`PlayContext`] are the only inputs the decision engine
//! receives. They are built from a [`RoundState`] for one seat and carry no
//! other seat's hand.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::legal_bids;
use crate::domain::cards_logic::winning_index;
use crate::domain::contract::Contract;
use crate::domain::round_memory::{RoundMemory, SeatVoids};
use crate::domain::state::{
    position_after_dealer, require_contract, require_seat, BidRecord, Phase, PlayRecord,
    RoundState, Seat,
};
use crate::domain::tricks::legal_moves;
use crate::domain::{card_beats, Bid, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Information visible to a seat that must bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidContext {
    pub seat: Seat,
    pub hand: Vec<Card>,
    /// The revealed trump card; its suit is trump for partnered contracts.
    pub trump_card: Card,
    /// 0 bids first, 3 is the dealer.
    pub position: u8,
    pub prior_bids: Vec<BidRecord>,
    /// True when the seat is an unanswered asker choosing Alone or Pass.
    pub choosing_alone: bool,
    /// Bids the engine would accept right now.
    pub legal: Vec<Bid>,
}

impl BidContext {
    pub fn for_seat(state: &RoundState, seat: Seat) -> Result<Self, DomainError> {
        require_seat(seat)?;
        if !matches!(state.phase, Phase::Bidding | Phase::ChoosingAlone) {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("no bid decision while {:?}", state.phase),
            ));
        }
        Ok(Self {
            seat,
            hand: state.hands[seat as usize].clone(),
            trump_card: state.trump_card,
            position: position_after_dealer(seat, state.dealer),
            prior_bids: state.bids.clone(),
            choosing_alone: state.phase == Phase::ChoosingAlone,
            legal: legal_bids(state, seat),
        })
    }

    pub fn trump(&self) -> Suit {
        self.trump_card.suit
    }

    /// An Ask is on the table and nobody has joined it yet.
    pub fn open_ask(&self) -> bool {
        self.prior_bids.iter().any(|b| b.bid == Bid::Ask)
            && !self.prior_bids.iter().any(|b| b.bid == Bid::Join)
    }

    pub fn is_legal(&self, bid: Bid) -> bool {
        self.legal.contains(&bid)
    }
}

/// Information visible to a seat that must play a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayContext {
    pub seat: Seat,
    pub contract: Contract,
    pub hand: Vec<Card>,
    /// Cards the engine would accept right now.
    pub legal: Vec<Card>,
    /// Plays so far in the open trick.
    pub current_trick: Vec<PlayRecord>,
    pub trump: Suit,
    pub led_suit: Option<Suit>,
    /// Seats on the same side as `seat`.
    pub partner_ids: Vec<Seat>,
    /// Everything played this round, including the open trick.
    pub memory: RoundMemory,
}

impl PlayContext {
    pub fn for_seat(state: &RoundState, seat: Seat) -> Result<Self, DomainError> {
        require_seat(seat)?;
        if state.phase != Phase::Playing {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("no play decision while {:?}", state.phase),
            ));
        }
        let contract = *require_contract(state, "PlayContext::for_seat")?;
        let current_trick = state
            .current_trick()
            .map(|t| t.plays.clone())
            .unwrap_or_default();
        Ok(Self {
            seat,
            contract,
            hand: state.hands[seat as usize].clone(),
            legal: legal_moves(state, seat),
            led_suit: current_trick.first().map(|p| p.card.suit),
            current_trick,
            trump: state.trump,
            partner_ids: contract.partners_of(seat),
            memory: RoundMemory::from_round(state),
        })
    }

    pub fn declarer(&self) -> Seat {
        self.contract.declarer
    }

    pub fn is_declaring(&self) -> bool {
        self.contract.is_declaring(self.seat)
    }

    pub fn is_misery(&self) -> bool {
        self.contract.kind.is_misery()
    }

    pub fn is_leading(&self) -> bool {
        self.current_trick.is_empty()
    }

    /// Play currently winning the open trick.
    pub fn winning_play(&self) -> Option<PlayRecord> {
        let cards: Vec<Card> = self.current_trick.iter().map(|p| p.card).collect();
        winning_index(&cards, self.trump).map(|i| self.current_trick[i])
    }

    pub fn partner_winning(&self) -> bool {
        self.winning_play()
            .is_some_and(|p| self.partner_ids.contains(&p.seat))
    }

    /// Seats still to play after this one in the open trick.
    pub fn players_after(&self) -> usize {
        3usize.saturating_sub(self.current_trick.len())
    }

    pub fn played_cards(&self) -> Vec<Card> {
        self.memory.played_cards()
    }

    pub fn known_voids(&self) -> SeatVoids {
        self.memory.known_voids()
    }

    /// Does `card` beat the current winner (or lead, if nothing is down)?
    pub fn beats_current(&self, card: Card) -> bool {
        match (self.winning_play(), self.led_suit) {
            (Some(best), Some(lead)) => card_beats(card, best.card, lead, self.trump),
            _ => true,
        }
    }
}
