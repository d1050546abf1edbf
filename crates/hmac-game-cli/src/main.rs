//! HMAC Game
//!
//! Console rock-paper-scissors with any odd number of moves. The computer's
//! move is committed with an HMAC before the player chooses, and the key is
//! disclosed afterwards so the player can check it.
//!
//! Usage: hmac-game Rock Paper Scissors Lizard Spock

use anyhow::{Context, Result};
use clap::Parser;
use hmac_game_core::{
    games::{MoveSet, OutcomeEngine},
    session::{self, Session},
};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE_EXAMPLE: &str = "Example usage: hmac-game Rock Paper Scissors";

#[derive(Parser, Debug)]
#[command(name = "hmac-game", version)]
#[command(about = "Play rock-paper-scissors with any odd number of moves against a committed computer move")]
struct Args {
    /// Move names in circle order (odd count, at least 3, all distinct)
    #[arg(value_name = "MOVE", allow_hyphen_values = true)]
    moves: Vec<String>,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, env = "HMAC_GAME_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let moves = match validate_or_report(args.moves, &mut io::stdout().lock()) {
        Ok(Some(moves)) => moves,
        Ok(None) => return ExitCode::FAILURE,
        Err(err) => {
            eprintln!("hmac-game failed: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match play(moves) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("hmac-game failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Validate the move list; on failure print the error and a usage example
/// to `out` and return `None` so no game starts.
fn validate_or_report<W: Write>(moves: Vec<String>, out: &mut W) -> Result<Option<MoveSet>> {
    match MoveSet::new(moves) {
        Ok(moves) => Ok(Some(moves)),
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            writeln!(out, "{USAGE_EXAMPLE}")?;
            Ok(None)
        }
    }
}

fn play(moves: MoveSet) -> Result<()> {
    info!(moves = moves.len(), "starting game");
    let mut session =
        Session::start(OutcomeEngine::new(moves)).context("failed to commit the computer's move")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session::run(&mut session, stdin.lock(), &mut stdout).context("game session failed")?;
    Ok(())
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
