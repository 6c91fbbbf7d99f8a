use tracing::{debug, info};

use crate::domain::cards_logic::winning_index;
use crate::domain::rules::TRICKS_PER_ROUND;
use crate::domain::state::{
    require_contract, require_phase, require_seat, Phase, PlayRecord, RoundOutcome, RoundState,
    Seat, Trick,
};
use crate::domain::{hand_has_suit, Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether a trick was completed (4 cards played).
    pub trick_completed: bool,
    /// Winner of the completed trick, if one was completed.
    pub trick_winner: Option<Seat>,
    /// 0-based index of the trick that is open after this play.
    pub trick_index_after: u8,
    /// Set when this play ended the round.
    pub round_outcome: Option<RoundOutcome>,
}

/// Cards `who` may play now. Empty when it is not their turn or not playing.
pub fn legal_moves(state: &RoundState, who: Seat) -> Vec<Card> {
    if state.expected_player() != Some(who) {
        return Vec::new();
    }

    let hand = &state.hands[who as usize];
    if let Some(lead) = state.current_trick().and_then(Trick::led_suit) {
        if hand_has_suit(hand, lead) {
            let mut v: Vec<Card> = hand.iter().copied().filter(|c| c.suit == lead).collect();
            v.sort();
            return v;
        }
    }

    let mut any = hand.clone();
    any.sort();
    any
}

/// Play a card into the current trick, enforcing phase, turn and suit-following.
pub fn play_card(
    state: &mut RoundState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::Playing, "play_card")?;
    require_seat(who)?;

    let turn = state
        .expected_player()
        .ok_or_else(|| DomainError::config("Invariant violated: no open trick while playing"))?;
    if turn != who {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("seat {who} played out of turn (expected {turn})"),
        ));
    }

    let Some(pos) = state.hands[who as usize].iter().position(|&c| c == card) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{card} is not in seat {who}'s hand"),
        ));
    };

    if !legal_moves(state, who).contains(&card) {
        return Err(DomainError::validation(
            ValidationKind::IllegalPlay,
            format!("{card} does not follow suit"),
        ));
    }

    let sequence = state.play_count() as u8;
    let removed = state.hands[who as usize].remove(pos);
    let trick_index = {
        let trick = state
            .tricks
            .last_mut()
            .ok_or_else(|| DomainError::config("Invariant violated: no open trick"))?;
        trick.plays.push(PlayRecord {
            seat: who,
            card: removed,
            sequence,
        });
        trick.index
    };
    debug!(round = state.round_no, trick = trick_index, seat = who, card = %removed, "card played");

    let mut result = PlayCardResult {
        trick_completed: false,
        trick_winner: None,
        trick_index_after: trick_index,
        round_outcome: None,
    };

    let Some(winner) = resolve_current_trick(state) else {
        return Ok(result);
    };
    if let Some(trick) = state.tricks.last_mut() {
        trick.winner = Some(winner);
    }
    result.trick_completed = true;
    result.trick_winner = Some(winner);
    debug!(round = state.round_no, trick = trick_index, winner, "trick won");

    let contract = *require_contract(state, "play_card trick_complete")?;
    if contract.kind.is_misery() && winner == contract.declarer {
        info!(
            round = state.round_no,
            trick = trick_index,
            declarer = winner,
            "misery declarer took a trick"
        );
        state.complete(RoundOutcome::MiseryBroken);
        result.round_outcome = Some(RoundOutcome::MiseryBroken);
        return Ok(result);
    }

    if state.tricks.len() >= TRICKS_PER_ROUND {
        info!(round = state.round_no, "all tricks played");
        state.complete(RoundOutcome::Played);
        result.round_outcome = Some(RoundOutcome::Played);
        return Ok(result);
    }

    state.open_trick(winner);
    result.trick_index_after = trick_index + 1;
    Ok(result)
}

/// Winner of the current trick once it holds four cards.
pub fn resolve_current_trick(state: &RoundState) -> Option<Seat> {
    let trick = state.current_trick()?;
    if !trick.is_complete() {
        return None;
    }
    resolve_trick(trick, state.trump)
}

/// Seat holding the winning card of a (possibly partial) trick.
pub fn resolve_trick(trick: &Trick, trump: Suit) -> Option<Seat> {
    let cards = trick.cards();
    let best = winning_index(&cards, trump)?;
    Some(trick.plays[best].seat)
}
