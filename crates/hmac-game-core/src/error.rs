//! Error type shared by every part of the game.

use thiserror::Error;

/// Errors from game operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("The number of moves must be an odd number and at least 3 (got {0})")]
    InvalidCount(usize),

    #[error("All moves must be unique: {0:?} appears more than once")]
    DuplicateMove(String),

    #[error("Invalid move: {0:?}")]
    InvalidInputToken(String),

    #[error("Move index {index} is out of range for {count} moves")]
    MoveOutOfRange { index: usize, count: usize },

    #[error("Session is already finished")]
    SessionClosed,

    #[error("Secure random source failed: {0}")]
    Entropy(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Whether the session can keep prompting after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GameError::InvalidInputToken(_))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
