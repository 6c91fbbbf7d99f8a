//! The auction: bid hierarchy, turn order and contract resolution.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::contract::{Contract, ContractKind};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    require_contract, require_phase, require_seat, round_start_seat, BidRecord, Phase,
    RoundOutcome, RoundState, Seat,
};
use crate::domain::Suit;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bid {
    Pass,
    Ask,
    Join,
    /// Only available to an unanswered asker.
    Alone,
    Abundance,
    Misery,
    OpenMisery,
    GrandSlam,
}

impl Bid {
    pub const ALL: [Bid; 8] = [
        Bid::Pass,
        Bid::Ask,
        Bid::Join,
        Bid::Alone,
        Bid::Abundance,
        Bid::Misery,
        Bid::OpenMisery,
        Bid::GrandSlam,
    ];

    /// Hierarchy level used for auction comparisons.
    pub fn level(self) -> u8 {
        match self {
            Bid::Pass => 0,
            Bid::Ask | Bid::Join | Bid::Alone => 1,
            Bid::Abundance => 2,
            Bid::Misery => 3,
            Bid::OpenMisery => 4,
            Bid::GrandSlam => 5,
        }
    }

    /// Bids that close the auction the moment they are made.
    pub fn wins_instantly(self) -> bool {
        self.level() >= 2
    }

    /// Contract a bid becomes when it wins outright.
    fn solo_contract(self) -> Option<ContractKind> {
        match self {
            Bid::Alone => Some(ContractKind::Alone),
            Bid::Abundance => Some(ContractKind::Abundance),
            Bid::Misery => Some(ContractKind::Misery),
            Bid::OpenMisery => Some(ContractKind::OpenMisery),
            Bid::GrandSlam => Some(ContractKind::GrandSlam),
            Bid::Pass | Bid::Ask | Bid::Join => None,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bid::Pass => "Pass",
            Bid::Ask => "Ask",
            Bid::Join => "Join",
            Bid::Alone => "Alone",
            Bid::Abundance => "Abundance",
            Bid::Misery => "Misery",
            Bid::OpenMisery => "Open Misery",
            Bid::GrandSlam => "Grand Slam",
        };
        f.write_str(s)
    }
}

/// What an accepted bid did to the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidOutcome {
    /// Auction continues with `next_bidder`.
    Recorded { next_bidder: Seat },
    /// Ask went unanswered; the asker must choose Alone or Pass.
    AwaitingAlone { asker: Seat },
    /// Auction closed with a contract; the round is now playing.
    ContractWon(Contract),
    /// Nobody took a contract; the round is complete.
    AllPassed,
}

/// Running maximum level among non-Pass bids.
pub fn max_level(bids: &[BidRecord]) -> u8 {
    bids.iter().map(|b| b.bid.level()).max().unwrap_or(0)
}

fn illegal(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::IllegalBid, detail)
}

/// Check `bid` against the hierarchy for the current auction state, ignoring turn.
fn check_hierarchy(state: &RoundState, seat: Seat, bid: Bid) -> Result<(), DomainError> {
    if state.phase == Phase::ChoosingAlone {
        return match bid {
            Bid::Alone | Bid::Pass => Ok(()),
            other => Err(illegal(format!("must choose Alone or Pass, got {other}"))),
        };
    }

    let max = max_level(&state.bids);
    let has = |wanted: Bid| state.bids.iter().any(|b| b.bid == wanted);

    match bid {
        Bid::Pass => Ok(()),
        Bid::Alone => Err(illegal("Alone is only available to an unanswered asker")),
        Bid::Ask if has(Bid::Ask) => Err(illegal("Ask already bid")),
        Bid::Join if !has(Bid::Ask) => Err(illegal("cannot Join without an Ask")),
        Bid::Join if has(Bid::Join) => Err(illegal("Ask already joined")),
        _ if bid.level() < max => Err(illegal(format!("cannot bid {bid} after a higher bid"))),
        _ if bid.level() >= 2
            && state
                .bids
                .iter()
                .any(|b| b.seat != seat && b.bid.level() == bid.level()) =>
        {
            Err(illegal(format!("{bid} already claimed")))
        }
        _ => Ok(()),
    }
}

/// Check phase, turn and hierarchy for a prospective bid.
pub fn validate_bid(state: &RoundState, seat: Seat, bid: Bid) -> Result<(), DomainError> {
    require_seat(seat)?;
    if !matches!(state.phase, Phase::Bidding | Phase::ChoosingAlone) {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("cannot bid while {:?}", state.phase),
        ));
    }
    match state.expected_bidder() {
        Some(expected) if expected == seat => {}
        expected => {
            return Err(DomainError::validation(
                ValidationKind::OutOfTurn,
                format!("seat {seat} bid out of turn (expected {expected:?})"),
            ))
        }
    }
    check_hierarchy(state, seat, bid)
}

/// Bids `seat` could legally make right now. Empty when it is not their turn.
pub fn legal_bids(state: &RoundState, seat: Seat) -> Vec<Bid> {
    Bid::ALL
        .into_iter()
        .filter(|b| validate_bid(state, seat, *b).is_ok())
        .collect()
}

/// Keep an advisory bid if it would be accepted, otherwise Pass.
pub fn sanitize_bid(state: &RoundState, seat: Seat, bid: Bid) -> Bid {
    match validate_bid(state, seat, bid) {
        Ok(()) => bid,
        Err(_) => Bid::Pass,
    }
}

/// Record one bid and advance the auction.
pub fn place_bid(state: &mut RoundState, seat: Seat, bid: Bid) -> Result<BidOutcome, DomainError> {
    validate_bid(state, seat, bid)?;
    state.bids.push(BidRecord { seat, bid });
    debug!(round = state.round_no, seat, %bid, "bid accepted");

    if state.phase == Phase::ChoosingAlone {
        return Ok(match bid {
            Bid::Alone => start_play(state, Contract::solo(ContractKind::Alone, seat)),
            _ => all_passed(state),
        });
    }

    if bid.wins_instantly() {
        if let Some(kind) = bid.solo_contract() {
            return Ok(start_play(state, Contract::solo(kind, seat)));
        }
    }

    if state.bids.len() < PLAYERS {
        let next_bidder = state
            .expected_bidder()
            .ok_or_else(|| DomainError::config("auction open but no next bidder"))?;
        return Ok(BidOutcome::Recorded { next_bidder });
    }

    resolve_auction(state)
}

/// Close a full auction of four bids.
fn resolve_auction(state: &mut RoundState) -> Result<BidOutcome, DomainError> {
    let find = |wanted: Bid| {
        state
            .bids
            .iter()
            .find(|b| b.bid == wanted)
            .map(|b| b.seat)
    };

    // First bid at the maximum level wins.
    let top = state
        .bids
        .iter()
        .filter(|b| b.bid != Bid::Pass)
        .fold(None::<BidRecord>, |best, b| match best {
            Some(cur) if cur.bid.level() >= b.bid.level() => Some(cur),
            _ => Some(*b),
        });

    let Some(top) = top else {
        return Ok(all_passed(state));
    };

    let outcome = match (find(Bid::Ask), find(Bid::Join)) {
        (Some(asker), Some(joiner)) if top.bid.level() <= 1 => start_play(
            state,
            Contract::partnered(ContractKind::AskJoin, asker, joiner),
        ),
        (Some(asker), None) if top.bid.level() <= 1 => {
            state.phase = Phase::ChoosingAlone;
            info!(round = state.round_no, asker, "ask unanswered, asker chooses");
            BidOutcome::AwaitingAlone { asker }
        }
        _ => {
            let kind = top.bid.solo_contract().ok_or_else(|| {
                DomainError::config(format!("auction resolved on unplayable bid {}", top.bid))
            })?;
            start_play(state, Contract::solo(kind, top.seat))
        }
    };
    Ok(outcome)
}

fn start_play(state: &mut RoundState, contract: Contract) -> BidOutcome {
    info!(
        round = state.round_no,
        contract = contract.kind.label(),
        declarer = contract.declarer,
        partner = ?contract.partner,
        "contract won"
    );
    state.contract = Some(contract);
    state.phase = Phase::Playing;
    state.open_trick(round_start_seat(state.dealer));
    BidOutcome::ContractWon(contract)
}

fn all_passed(state: &mut RoundState) -> BidOutcome {
    info!(round = state.round_no, "all passed");
    state.complete(RoundOutcome::AllPassed);
    BidOutcome::AllPassed
}

/// Declarer of Abundance or Grand Slam names trump before the first card.
pub fn set_trump(state: &mut RoundState, seat: Seat, suit: Suit) -> Result<(), DomainError> {
    require_phase(state, Phase::Playing, "set_trump")?;
    let contract = *require_contract(state, "set_trump")?;
    if !contract.kind.allows_trump_override() {
        return Err(DomainError::validation(
            ValidationKind::InvalidTrumpOverride,
            format!("{} does not allow choosing trump", contract.kind.label()),
        ));
    }
    if contract.declarer != seat {
        return Err(DomainError::validation(
            ValidationKind::InvalidTrumpOverride,
            format!("only the declarer (seat {}) may choose trump", contract.declarer),
        ));
    }
    if state.play_count() > 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidTrumpOverride,
            "trump is fixed once play has started",
        ));
    }
    debug!(round = state.round_no, seat, trump = %suit, "trump chosen");
    state.trump = suit;
    Ok(())
}
