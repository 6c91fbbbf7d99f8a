use tracing::{debug, warn};

use super::GameFlow;
use crate::ai::AiError;
use crate::domain::bidding::sanitize_bid;
use crate::domain::cards_logic::lowest;
use crate::domain::state::Seat;
use crate::domain::{Bid, BidContext, Phase, PlayContext};
use crate::errors::domain::DomainError;

/// Type of action needed from a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActionType {
    Bid,
    Trump,
    Play,
}

impl GameFlow {
    fn determine_next_action(&self) -> Option<(Seat, ActionType)> {
        if let Some(declarer) = self.trump_pending {
            return Some((declarer, ActionType::Trump));
        }
        let state = self.round.as_ref()?;
        match state.phase {
            Phase::Bidding | Phase::ChoosingAlone => {
                state.expected_bidder().map(|s| (s, ActionType::Bid))
            }
            Phase::Playing => state.expected_player().map(|s| (s, ActionType::Play)),
            Phase::Dealing | Phase::Completed => None,
        }
    }

    /// Run automated seats until a human must act or the round is complete.
    ///
    /// Returns the number of actions taken. AI suggestions are advisory: an
    /// illegal bid is downgraded to Pass and an illegal card is replaced by
    /// the lowest legal one, both with a warning.
    pub fn process_ai_turns(&mut self) -> Result<usize, DomainError> {
        let mut actions = 0;
        while let Some((seat, action)) = self.determine_next_action() {
            if self.seats[seat as usize].is_human() {
                debug!(seat, ?action, "Human seat's turn, stopping AI processing");
                break;
            }
            match action {
                ActionType::Trump => self.ai_trump(seat)?,
                ActionType::Bid => self.ai_bid(seat)?,
                ActionType::Play => self.ai_play(seat)?,
            }
            actions += 1;
        }
        Ok(actions)
    }

    fn ai_trump(&mut self, seat: Seat) -> Result<(), DomainError> {
        let (Some(ai), Some(state)) = (&self.players[seat as usize], &self.round) else {
            return Ok(());
        };
        let rng = &mut self.seat_rngs[seat as usize];
        let suit = ai.choose_trump(&state.hands[seat as usize], rng)?;
        self.choose_trump(seat, suit)
    }

    fn ai_bid(&mut self, seat: Seat) -> Result<(), DomainError> {
        let (Some(ai), Some(state)) = (&self.players[seat as usize], &self.round) else {
            return Ok(());
        };
        let ctx = BidContext::for_seat(state, seat)?;
        let rng = &mut self.seat_rngs[seat as usize];
        let suggested = if ctx.choosing_alone {
            ai.choose_alone_or_pass(&ctx)
        } else {
            ai.choose_bid(&ctx, rng)
        }
        .unwrap_or_else(|err| {
            warn!(seat, error = %err, "AI bid failed, passing");
            Bid::Pass
        });

        let bid = sanitize_bid(state, seat, suggested);
        if bid != suggested {
            warn!(seat, %suggested, "AI bid illegal here, downgraded to Pass");
        }
        self.submit_bid(seat, bid)?;
        Ok(())
    }

    fn ai_play(&mut self, seat: Seat) -> Result<(), DomainError> {
        let (Some(ai), Some(state)) = (&self.players[seat as usize], &self.round) else {
            return Ok(());
        };
        let ctx = PlayContext::for_seat(state, seat)?;
        let rng = &mut self.seat_rngs[seat as usize];
        let card = match ai.choose_play(&ctx, rng) {
            Ok(card) if ctx.legal.contains(&card) => card,
            other => {
                let reason = match other {
                    Ok(card) => AiError::InvalidMove(format!("{card} is not playable")),
                    Err(err) => err,
                };
                warn!(seat, error = %reason, "AI play rejected, playing lowest legal card");
                lowest(&ctx.legal).ok_or(reason)?
            }
        };
        self.submit_play(seat, card)?;
        Ok(())
    }
}
