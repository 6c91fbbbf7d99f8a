//! Resolved contracts: which side declares, who partners whom, and what they must make.

use serde::{Deserialize, Serialize};

use super::rules::{
    ABUNDANCE_TARGET, ALONE_TARGET, GRAND_SLAM_TARGET, PARTNERED_TARGET, PLAYERS,
};
use super::state::Seat;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    /// Ask answered by Join.
    AskJoin,
    /// Ask left unanswered, asker plays alone.
    Alone,
    Troel,
    Abundance,
    Misery,
    OpenMisery,
    GrandSlam,
}

impl ContractKind {
    /// Partnered contracts put two seats on the declaring side.
    pub fn is_partnered(self) -> bool {
        matches!(self, ContractKind::AskJoin | ContractKind::Troel)
    }

    pub fn is_misery(self) -> bool {
        matches!(self, ContractKind::Misery | ContractKind::OpenMisery)
    }

    /// Contracts that let the declarer name trump after winning the auction.
    pub fn allows_trump_override(self) -> bool {
        matches!(self, ContractKind::Abundance | ContractKind::GrandSlam)
    }

    /// Tricks the declaring side must take. Misery contracts must take none.
    pub fn target_tricks(self) -> u8 {
        match self {
            ContractKind::AskJoin | ContractKind::Troel => PARTNERED_TARGET,
            ContractKind::Alone => ALONE_TARGET,
            ContractKind::Abundance => ABUNDANCE_TARGET,
            ContractKind::GrandSlam => GRAND_SLAM_TARGET,
            ContractKind::Misery | ContractKind::OpenMisery => 0,
        }
    }

    /// Whether `tricks` taken by the declaring side fulfil the contract.
    pub fn is_made(self, tricks: u8) -> bool {
        if self.is_misery() {
            tricks == 0
        } else {
            tricks >= self.target_tricks()
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContractKind::AskJoin => "ask/join",
            ContractKind::Alone => "alone",
            ContractKind::Troel => "troel",
            ContractKind::Abundance => "abundance",
            ContractKind::Misery => "misery",
            ContractKind::OpenMisery => "open misery",
            ContractKind::GrandSlam => "grand slam",
        }
    }
}

/// The auction's result: contract kind, declarer and optional partner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub kind: ContractKind,
    pub declarer: Seat,
    pub partner: Option<Seat>,
}

impl Contract {
    pub fn solo(kind: ContractKind, declarer: Seat) -> Self {
        Self {
            kind,
            declarer,
            partner: None,
        }
    }

    pub fn partnered(kind: ContractKind, declarer: Seat, partner: Seat) -> Self {
        Self {
            kind,
            declarer,
            partner: Some(partner),
        }
    }

    /// Declaring seats, declarer first.
    pub fn declarers(&self) -> Vec<Seat> {
        let mut seats = vec![self.declarer];
        if let Some(p) = self.partner {
            seats.push(p);
        }
        seats
    }

    pub fn defenders(&self) -> Vec<Seat> {
        (0..PLAYERS as Seat)
            .filter(|s| !self.is_declaring(*s))
            .collect()
    }

    pub fn is_declaring(&self, seat: Seat) -> bool {
        seat == self.declarer || self.partner == Some(seat)
    }

    /// Seats on the same side as `seat`. A solo declarer has none; defenders
    /// are each other's partners.
    pub fn partners_of(&self, seat: Seat) -> Vec<Seat> {
        let side = if self.is_declaring(seat) {
            self.declarers()
        } else {
            self.defenders()
        };
        side.into_iter().filter(|s| *s != seat).collect()
    }
}
