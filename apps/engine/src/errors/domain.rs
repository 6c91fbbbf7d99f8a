//! Domain-level error type used by the rules engine and the orchestrator.
//!
//! Every fault here is local and recoverable: the engine rejects the action
//! and leaves the round untouched. Nothing is silently corrected.

use thiserror::Error;

/// Which rule a rejected action violated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Someone other than the expected bidder/player acted.
    OutOfTurn,
    /// Bid hierarchy violation, Join without an open Ask, repeated Ask, etc.
    IllegalBid,
    CardNotInHand,
    /// Follow-suit violation.
    IllegalPlay,
    /// Action attempted while the round is in the wrong phase.
    PhaseMismatch,
    ParseCard,
    InvalidSeat,
    InvalidTrumpOverride,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input validation or game rule violation
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// Round or contract state that cannot be resolved
    #[error("configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config(detail.into())
    }

    /// The violated rule, if this is a validation error.
    pub fn kind(&self) -> Option<&ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(kind),
            DomainError::Config(_) => None,
        }
    }

    pub fn is_kind(&self, kind: ValidationKind) -> bool {
        self.kind() == Some(&kind)
    }
}
