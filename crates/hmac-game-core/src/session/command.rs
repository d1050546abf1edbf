//! Player input tokens.

use crate::games::{MoveIndex, MoveSet};
use crate::{GameError, Result};

/// Parsed line of player input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// `0`
    Exit,
    /// `?`
    Help,
    /// `1..=N`, already converted to a zero-based index
    Play(MoveIndex),
}

impl Command {
    /// Parse one input line against the game's move set.
    ///
    /// Surrounding whitespace is ignored. Anything that is not `0`, `?` or a
    /// menu number yields [`GameError::InvalidInputToken`].
    pub fn parse(line: &str, moves: &MoveSet) -> Result<Self> {
        let token = line.trim();
        match token {
            "0" => Ok(Command::Exit),
            "?" => Ok(Command::Help),
            _ => match token.parse::<usize>() {
                Ok(number) if (1..=moves.len()).contains(&number) => {
                    moves.index(number - 1).map(Command::Play)
                }
                _ => Err(GameError::InvalidInputToken(token.to_string())),
            },
        }
    }
}
