//! Circular dominance rules for an odd number of moves.
//!
//! Moves sit on a circle in the order they were given. Each move is beaten by
//! the `N / 2` moves that follow it clockwise and beats the `N / 2` moves that
//! precede it, so every move wins and loses equally often.

use super::{MoveIndex, MoveSet, Outcome, Verdict};
use tracing::trace;

/// Immutable judge for one game's move set
#[derive(Clone, Debug)]
pub struct OutcomeEngine {
    moves: MoveSet,
}

impl OutcomeEngine {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// Check if `a` beats `b`.
    ///
    /// `a` wins when it lies within the next `half` positions clockwise from `b`.
    pub fn beats(&self, a: MoveIndex, b: MoveIndex) -> bool {
        let n = self.moves.len();
        let distance = (a.get() + n - b.get()) % n;
        (1..=self.moves.half()).contains(&distance)
    }

    /// Compare two moves; the result is relative to argument order
    pub fn outcome(&self, first: MoveIndex, second: MoveIndex) -> Outcome {
        let outcome = if first == second {
            Outcome::Draw
        } else if self.beats(first, second) {
            Outcome::FirstWins
        } else {
            Outcome::SecondWins
        };
        trace!(%first, %second, ?outcome, "judged moves");
        outcome
    }

    /// Label for a round where `player` faced `computer`
    pub fn winner_label(&self, player: MoveIndex, computer: MoveIndex) -> &'static str {
        self.outcome(player, computer).winner_label()
    }

    /// N×N grid; row `i` holds move `i`'s verdict against every column move.
    pub fn help_matrix(&self) -> Vec<Vec<Verdict>> {
        self.moves
            .indices()
            .map(|row| {
                self.moves
                    .indices()
                    .map(|col| Verdict::from(self.outcome(row, col)))
                    .collect()
            })
            .collect()
    }
}
