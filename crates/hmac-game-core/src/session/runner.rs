//! Synchronous read-evaluate loop over line-oriented input.

use super::{Response, Session};
use crate::Result;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter your move: ";
const INVALID_INPUT: &str = "Invalid move. Please try again.";

/// Play `session` to completion.
///
/// Shows the commitment and menu, then processes one line at a time until the
/// player exits, a move resolves the round, or `input` runs out.
pub fn run<R: BufRead, W: Write>(session: &mut Session, mut input: R, out: &mut W) -> Result<()> {
    writeln!(out, "HMAC: {}", session.commitment())?;
    write!(out, "{}", session.menu())?;

    let mut buf = Vec::new();
    while !session.is_finished() {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(out)?;
            session.close();
            break;
        }
        // Undecodable bytes become U+FFFD and fail as an ordinary bad token.
        let line = String::from_utf8_lossy(&buf);

        match session.handle(&line) {
            Ok(Response::Exit) => writeln!(out, "Game exited.")?,
            Ok(Response::Help(table)) => write!(out, "{}", table)?,
            Ok(Response::Resolved(reveal)) => write!(out, "{}", reveal)?,
            Err(e) if e.is_recoverable() => writeln!(out, "{}", INVALID_INPUT)?,
            Err(e) => return Err(e),
        }
    }

    out.flush()?;
    Ok(())
}
