//! Error handling for the Wiezen engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
