//! Troel: the forced contract called by a seat dealt three or four Aces.

use tracing::info;

use super::contract::{Contract, ContractKind};
use super::rules::PLAYERS;
use super::state::{Phase, RoundState, Seat};
use crate::domain::{Card, Rank, Suit};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TroelResult {
    pub caller: Seat,
    pub partner: Seat,
    pub trump: Suit,
    /// The card that fixes trump and identifies the partner.
    pub revealed: Card,
}

/// Inspect freshly dealt hands for a Troel.
///
/// With three Aces the holder of the fourth Ace partners the caller and that
/// Ace's suit is trump. With all four Aces, Hearts is trump and the partner is
/// whoever holds the highest Heart below the Ace.
pub fn detect_troel(hands: &[Vec<Card>; PLAYERS]) -> Option<TroelResult> {
    let (caller, aces) = hands.iter().enumerate().find_map(|(seat, hand)| {
        let aces = hand.iter().filter(|c| c.rank == Rank::Ace).count();
        (aces >= 3).then_some((seat as Seat, aces))
    })?;

    let others = || {
        hands
            .iter()
            .enumerate()
            .filter(move |(seat, _)| *seat as Seat != caller)
    };

    if aces == 3 {
        return others().find_map(|(seat, hand)| {
            hand.iter()
                .find(|c| c.rank == Rank::Ace)
                .map(|&ace| TroelResult {
                    caller,
                    partner: seat as Seat,
                    trump: ace.suit,
                    revealed: ace,
                })
        });
    }

    Rank::ALL.iter().rev().skip(1).find_map(|&rank| {
        let wanted = Card::new(Suit::Hearts, rank);
        others().find_map(|(seat, hand)| {
            hand.contains(&wanted).then_some(TroelResult {
                caller,
                partner: seat as Seat,
                trump: Suit::Hearts,
                revealed: wanted,
            })
        })
    })
}

/// Skip the auction: contract Troel, trump fixed, partner leads trick 0.
pub(crate) fn apply(state: &mut RoundState, found: &TroelResult) {
    info!(
        round = state.round_no,
        caller = found.caller,
        partner = found.partner,
        trump = %found.trump,
        "troel called"
    );
    state.trump = found.trump;
    state.trump_card = found.revealed;
    state.contract = Some(Contract::partnered(
        ContractKind::Troel,
        found.caller,
        found.partner,
    ));
    state.phase = Phase::Playing;
    state.open_trick(found.partner);
}
