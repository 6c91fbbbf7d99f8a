use tracing::{debug, info};

use super::GameFlow;
use crate::domain::bidding::{place_bid, set_trump};
use crate::domain::state::Seat;
use crate::domain::tricks::{play_card, PlayCardResult};
use crate::domain::{Bid, BidOutcome, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Submit a bid for `seat` in the current round.
    pub fn submit_bid(&mut self, seat: Seat, bid: Bid) -> Result<BidOutcome, DomainError> {
        let state = self.round_mut("submit_bid")?;
        let outcome = place_bid(state, seat, bid)?;
        if let BidOutcome::ContractWon(contract) = outcome {
            if contract.kind.allows_trump_override() {
                debug!(declarer = contract.declarer, "awaiting trump choice");
                self.trump_pending = Some(contract.declarer);
            }
        }
        Ok(outcome)
    }

    /// Abundance / Grand-Slam declarer names trump.
    pub fn choose_trump(&mut self, seat: Seat, suit: Suit) -> Result<(), DomainError> {
        let state = self.round_mut("choose_trump")?;
        set_trump(state, seat, suit)?;
        self.trump_pending = None;
        info!(seat, trump = %suit, "trump overridden by declarer");
        Ok(())
    }

    /// Play `card` for `seat`. Refused while the declarer still owes a trump choice.
    pub fn submit_play(&mut self, seat: Seat, card: Card) -> Result<PlayCardResult, DomainError> {
        if let Some(declarer) = self.trump_pending {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                format!("seat {declarer} must choose trump before play starts"),
            ));
        }
        let state = self.round_mut("submit_play")?;
        play_card(state, seat, card)
    }
}
