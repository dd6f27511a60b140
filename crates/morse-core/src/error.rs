//! Error types for morse-core

use thiserror::Error;

/// Reasons a words-per-minute rate is rejected
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RateError {
    #[error("WPM values must be positive, got {0}")]
    NonPositive(f64),
    #[error("Overall WPM {overall} must not exceed the character WPM {character}")]
    Inverted { overall: f64, character: f64 },
    #[error("{0} WPM not supported: subnanosecond timing precision required")]
    TooFast(f64),
    #[error("{0} WPM not supported: one word does not fit in the nanosecond range")]
    TooSlow(f64),
}

/// Input that has no encoding in a symbol table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownSymbol {
    #[error("no Morse encoding for the character {0:?}")]
    Char(char),
    #[error("no Morse encoding for the prosign {0:?}")]
    Prosign(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorseError {
    #[error("Invalid rate: {0}")]
    InvalidRate(#[from] RateError),
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(#[from] UnknownSymbol),
    #[error("Invalid symbol table: {0}")]
    InvalidTable(String),
    #[error("Unknown standard: {0}")]
    UnknownStandard(String),
}

pub type Result<T> = std::result::Result<T, MorseError>;

/// Failure while playing: either the text could not be compiled, or a
/// collaborator gave up part way through
#[derive(Debug, Error)]
pub enum PlayError<E> {
    #[error(transparent)]
    Morse(#[from] MorseError),
    #[error("Playback collaborator failed: {0}")]
    Collaborator(E),
}
