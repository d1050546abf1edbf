//! Interactive game session: input commands, the state machine, and the
//! line-oriented loop that drives it.

mod command;
mod runner;
mod state;

pub use command::Command;
pub use runner::run;
pub use state::{Response, Reveal, Session, SessionState};
