//! HMAC Game Core Library
//!
//! This crate provides the move rules, the commit-reveal primitives, and the
//! interactive session logic for a rock-paper-scissors style game played with
//! any odd number of moves.

pub mod crypto;
pub mod error;
pub mod games;
pub mod session;

pub use crypto::{Commitment, HmacKey};
pub use error::{GameError, Result};
pub use games::{MoveIndex, MoveSet, Outcome, OutcomeEngine, Verdict};
pub use session::{Command, Reveal, Session, SessionState};
