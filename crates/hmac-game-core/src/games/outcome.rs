//! Round outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of comparing two moves, relative to argument order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Same result seen with the arguments swapped
    pub fn flip(&self) -> Outcome {
        match self {
            Outcome::Draw => Outcome::Draw,
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
        }
    }

    /// User-facing label; the player is the first argument, the computer the second.
    pub fn winner_label(&self) -> &'static str {
        match self {
            Outcome::Draw => "Draw",
            Outcome::FirstWins => "Player wins!",
            Outcome::SecondWins => "Computer wins!",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.winner_label())
    }
}

/// Help table cell, read from the row move's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Draw,
    Win,
    Lose,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Draw => "Draw",
            Verdict::Win => "Win",
            Verdict::Lose => "Lose",
        }
    }
}

impl From<Outcome> for Verdict {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Draw => Verdict::Draw,
            Outcome::FirstWins => Verdict::Win,
            Outcome::SecondWins => Verdict::Lose,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pass through so width/alignment flags apply.
        f.pad(self.as_str())
    }
}
