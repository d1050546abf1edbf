//! Move list validation and indexing.

use crate::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Check that a move list can start a game.
///
/// The count is checked before uniqueness, so `["Rock", "Rock"]` reports
/// [`GameError::InvalidCount`].
pub fn validate_moves<S: AsRef<str>>(moves: &[S]) -> Result<()> {
    if moves.len() % 2 == 0 || moves.len() < 3 {
        return Err(GameError::InvalidCount(moves.len()));
    }

    let mut seen = HashSet::with_capacity(moves.len());
    for name in moves {
        if !seen.insert(name.as_ref()) {
            return Err(GameError::DuplicateMove(name.as_ref().to_string()));
        }
    }

    Ok(())
}

/// Position of a move within a [`MoveSet`]; only obtainable from a set, so
/// always in range for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveIndex(usize);

impl MoveIndex {
    /// Zero-based position
    pub fn get(&self) -> usize {
        self.0
    }

    /// One-based number shown in the menu
    pub fn menu_number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for MoveIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered, validated list of distinct move names
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate and wrap a move list
    pub fn new(moves: Vec<String>) -> Result<Self> {
        validate_moves(&moves)?;
        Ok(Self(moves))
    }

    /// Number of moves (odd, at least 3)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a validated set has at least three moves
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many moves each move beats (and loses to)
    pub fn half(&self) -> usize {
        self.0.len() / 2
    }

    /// Checked conversion from a zero-based position
    pub fn index(&self, position: usize) -> Result<MoveIndex> {
        if position < self.0.len() {
            Ok(MoveIndex(position))
        } else {
            Err(GameError::MoveOutOfRange {
                index: position,
                count: self.0.len(),
            })
        }
    }

    /// Find a move by exact, case-sensitive name
    pub fn index_of(&self, name: &str) -> Option<MoveIndex> {
        self.0.iter().position(|m| m == name).map(MoveIndex)
    }

    pub fn name(&self, index: MoveIndex) -> &str {
        &self.0[index.0]
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// All indices in menu order
    pub fn indices(&self) -> impl Iterator<Item = MoveIndex> + '_ {
        (0..self.0.len()).map(MoveIndex)
    }

    /// Indices paired with names, in menu order
    pub fn iter(&self) -> impl Iterator<Item = (MoveIndex, &str)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(i, name)| (MoveIndex(i), name.as_str()))
    }
}

impl TryFrom<Vec<String>> for MoveSet {
    type Error = GameError;

    fn try_from(moves: Vec<String>) -> Result<Self> {
        Self::new(moves)
    }
}

impl From<MoveSet> for Vec<String> {
    fn from(moves: MoveSet) -> Self {
        moves.0
    }
}
