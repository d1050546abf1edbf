//! Game definitions and logic.

mod engine;
mod moves;
mod outcome;
mod table;

pub use engine::OutcomeEngine;
pub use moves::{validate_moves, MoveIndex, MoveSet};
pub use outcome::{Outcome, Verdict};
pub use table::render_help_table;
