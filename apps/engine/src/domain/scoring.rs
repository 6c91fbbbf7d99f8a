use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::contract::{Contract, ContractKind};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{require_phase, Phase, RoundOutcome, RoundState, Seat};
use crate::errors::domain::DomainError;

/// Per-seat score changes for one round. Always sums to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScores {
    pub contract: Option<Contract>,
    /// Tricks taken by the declaring side.
    pub declarer_tricks: u8,
    pub made: bool,
    pub deltas: [i32; PLAYERS],
}

impl RoundScores {
    pub fn none() -> Self {
        Self {
            contract: None,
            declarer_tricks: 0,
            made: false,
            deltas: [0; PLAYERS],
        }
    }
}

/// Signed transfer each defender receives the negation of.
/// Positive when the declaring side made the contract.
pub fn points_per_defender(kind: ContractKind, tricks: u8) -> i32 {
    let made = kind.is_made(tricks);
    let t = tricks as i32;
    let value = match kind {
        ContractKind::AskJoin | ContractKind::Troel | ContractKind::Alone => {
            let target = kind.target_tricks() as i32;
            2 + (t - target).abs()
        }
        ContractKind::Abundance => 8,
        ContractKind::GrandSlam => 24,
        ContractKind::Misery => 12,
        ContractKind::OpenMisery => 16,
    };
    if made {
        value
    } else {
        -value
    }
}

/// Split `total` into `parts` integer shares that add back up to `total`.
///
/// Each share is the quotient truncated toward zero; the remainder goes to
/// the first share (the declarer).
pub fn split_transfer(total: i32, parts: usize) -> Vec<i32> {
    if parts == 0 {
        return Vec::new();
    }
    let n = parts as i32;
    let share = total / n;
    let mut shares = vec![share; parts];
    shares[0] += total - share * n;
    shares
}

/// Zero-sum deltas for a contract given the declaring side's trick count.
pub fn settle(contract: &Contract, declarer_tricks: u8) -> [i32; PLAYERS] {
    let ppd = points_per_defender(contract.kind, declarer_tricks);
    let declarers = contract.declarers();
    let defenders = contract.defenders();

    let mut deltas = [0i32; PLAYERS];
    let shares = split_transfer(ppd * defenders.len() as i32, declarers.len());
    for (seat, share) in declarers.iter().zip(shares) {
        deltas[*seat as usize] = share;
    }
    for seat in defenders {
        deltas[seat as usize] = -ppd;
    }
    deltas
}

/// Score a completed round.
pub fn score_round(state: &RoundState) -> Result<RoundScores, DomainError> {
    require_phase(state, Phase::Completed, "score_round")?;

    if state.outcome == Some(RoundOutcome::AllPassed) {
        return Ok(RoundScores::none());
    }
    let contract = state
        .contract
        .ok_or_else(|| DomainError::config("completed round has no contract to score"))?;

    let declarer_seats: Vec<Seat> = contract.declarers();
    let declarer_tricks = state.tricks_won_by(&declarer_seats);
    let deltas = settle(&contract, declarer_tricks);
    let made = contract.kind.is_made(declarer_tricks);

    info!(
        round = state.round_no,
        contract = contract.kind.label(),
        declarer_tricks,
        made,
        ?deltas,
        "round scored"
    );

    Ok(RoundScores {
        contract: Some(contract),
        declarer_tricks,
        made,
        deltas,
    })
}
