//! Plain-text rendering of the help matrix.

use super::OutcomeEngine;
use std::fmt::{Display, Write};

/// Narrowest column, wide enough for "Draw" and "Lose"
const MIN_CELL_WIDTH: usize = 4;
const CELL_GAP: usize = 2;

/// Render the (N+1)×(N+1) help grid: a header row and column of move names
/// around the body of Draw/Win/Lose verdicts for the row move.
pub fn render_help_table(engine: &OutcomeEngine) -> String {
    let moves = engine.moves();
    let width = moves
        .names()
        .iter()
        .map(|name| name.chars().count())
        .max()
        .unwrap_or(0)
        .max(MIN_CELL_WIDTH)
        + CELL_GAP;

    let mut table = String::new();
    push_row(&mut table, width, "", moves.names());
    for (name, verdicts) in moves.names().iter().zip(engine.help_matrix()) {
        push_row(&mut table, width, name, &verdicts);
    }
    table
}

fn push_row<T: Display>(table: &mut String, width: usize, head: &str, cells: &[T]) {
    let mut line = format!("{:width$}", head, width = width);
    for cell in cells {
        // Writing to a String cannot fail.
        let _ = write!(line, "{:width$}", cell, width = width);
    }
    table.push_str(line.trim_end());
    table.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MoveSet;

    fn engine(names: &[&str]) -> OutcomeEngine {
        let moves = names.iter().map(|s| s.to_string()).collect();
        OutcomeEngine::new(MoveSet::new(moves).unwrap())
    }

    #[test]
    fn test_classic_table() {
        let table = render_help_table(&engine(&["Rock", "Paper", "Scissors"]));
        let expected = concat!(
            "          Rock      Paper     Scissors\n",
            "Rock      Draw      Lose      Win\n",
            "Paper     Win       Draw      Lose\n",
            "Scissors  Lose      Win       Draw\n",
        );

        assert_eq!(table, expected);
    }

    #[test]
    fn test_short_names_use_minimum_width() {
        let table = render_help_table(&engine(&["a", "b", "c"]));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "      a     b     c");
        assert_eq!(lines[1], "a     Draw  Lose  Win");
    }

    #[test]
    fn test_grid_is_square() {
        let names = ["Rock", "Paper", "Scissors", "Lizard", "Spock"];
        let table = render_help_table(&engine(&names));

        assert_eq!(table.lines().count(), names.len() + 1);
        for (line, name) in table.lines().skip(1).zip(names) {
            assert!(line.starts_with(name));
            assert_eq!(line.split_whitespace().count(), names.len() + 1);
        }
    }
}
