//! Check a disclosed HMAC key against the hash shown before the move.
//!
//! Usage: hmac-verify --key <KEY> --hmac <HMAC> <MOVE>

use clap::Parser;
use hmac_game_core::crypto::{Commitment, HmacKey};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hmac-verify", version)]
#[command(about = "Verify that a revealed computer move matches the HMAC shown before play")]
struct Args {
    /// Key disclosed after the round (64 hex characters)
    #[arg(long)]
    key: HmacKey,

    /// HMAC shown before the player moved
    #[arg(long)]
    hmac: Commitment,

    /// Computer move that was revealed
    #[arg(value_name = "MOVE")]
    move_name: String,

    /// Log filter for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, env = "HMAC_GAME_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    if verify(&args) {
        println!("HMAC verified");
        ExitCode::SUCCESS
    } else {
        println!("HMAC mismatch");
        ExitCode::FAILURE
    }
}

fn verify(args: &Args) -> bool {
    let verified = args.hmac.verify(&args.key, &args.move_name);
    debug!(shown = %args.hmac, move_name = %args.move_name, verified, "checked HMAC");
    verified
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
