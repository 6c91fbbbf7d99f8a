use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::{GameFlow, RoundSummary};
use crate::domain::scoring::score_round;
use crate::domain::state::dealer_for_round;
use crate::domain::{derive_dealing_seed, derive_seat_seed, Deck, RoundOutcome, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

impl GameFlow {
    /// Deal the next round: carry (or shuffle) the deck, cut it, reveal trump
    /// and deal. A Troel hand skips straight to play.
    pub fn start_round(&mut self) -> Result<&RoundState, DomainError> {
        if self.round.is_some() {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "start_round: previous round not finished",
            ));
        }

        let round_no = self.rounds_played + 1;
        let dealer = dealer_for_round(self.starting_dealer, round_no);
        let mut rng = StdRng::seed_from_u64(derive_dealing_seed(self.game_seed, round_no));

        let carried = self.carried.take();
        let fresh = carried.is_none();
        let mut deck = Deck::from_played(carried, &mut rng);
        let cut = deck.cut(&mut rng);
        debug!(round = round_no, dealer, cut, fresh, "deck cut");

        for (seat, rng) in self.seat_rngs.iter_mut().enumerate() {
            *rng = StdRng::seed_from_u64(derive_seat_seed(self.game_seed, round_no, seat as u8));
        }

        let state = RoundState::from_deck(round_no, dealer, deck)?;
        info!(
            round = round_no,
            dealer,
            trump = %state.trump,
            trump_card = %state.trump_card,
            phase = ?state.phase,
            "Round dealt"
        );
        self.trump_pending = None;
        Ok(self.round.insert(state))
    }

    /// Score a completed round, add it to the totals and keep its card order
    /// for the next deal.
    pub fn finish_round(&mut self) -> Result<RoundSummary, DomainError> {
        let state = self.round.as_ref().ok_or_else(|| {
            DomainError::validation(ValidationKind::PhaseMismatch, "finish_round: no round in progress")
        })?;
        let scores = score_round(state)?;
        let outcome = state.outcome.unwrap_or(RoundOutcome::AllPassed);

        for (total, delta) in self.totals.iter_mut().zip(scores.deltas) {
            *total += delta;
        }
        let summary = RoundSummary {
            round_no: state.round_no,
            dealer: state.dealer,
            contract: scores.contract,
            outcome,
            declarer_tricks: scores.declarer_tricks,
            made: scores.made,
            deltas: scores.deltas,
            totals: self.totals,
        };

        self.carried = Some(state.carried_order());
        self.rounds_played = state.round_no;
        self.round = None;
        self.trump_pending = None;
        self.history.push(summary.clone());

        info!(
            round = summary.round_no,
            outcome = ?summary.outcome,
            deltas = ?summary.deltas,
            totals = ?summary.totals,
            "Round finished"
        );
        Ok(summary)
    }
}
