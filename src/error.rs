//! Error types for the game engine

use thiserror::Error;

/// Why a placement was refused
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("cell is outside 0-8")]
    OutOfRange,
    #[error("cell is already occupied")]
    Occupied,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("illegal move at cell {index}: {reason}")]
    IllegalMove {
        index: usize,
        reason: IllegalMoveReason,
    },

    /// The move selector was asked for a move where none exists
    #[error("no move can be selected: {0}")]
    PreconditionViolation(&'static str),

    #[error("unknown strategy '{0}' (expected random, heuristic or optimal)")]
    Configuration(String),

    #[error("invalid board '{input}': {reason}")]
    InvalidBoard { input: String, reason: String },
}
