//! Single-game state machine.
//!
//! ```text
//! AwaitingInput --"0" / end of input--> Exited
//! AwaitingInput --"?" / invalid-------> AwaitingInput
//! AwaitingInput --"1".."N"------------> Resolved
//! ```

use super::Command;
use crate::crypto::{Commitment, HmacKey};
use crate::games::{render_help_table, MoveIndex, Outcome, OutcomeEngine};
use crate::{GameError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};
use std::fmt;
use tracing::{debug, info};

/// Everything disclosed once the player's move is fixed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub player_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub key: HmacKey,
}

impl fmt::Display for Reveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Your move: {}", self.player_move)?;
        writeln!(f, "Computer move: {}", self.computer_move)?;
        writeln!(f, "{}", self.outcome.winner_label())?;
        writeln!(f, "HMAC key: {}", self.key.to_hex())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Exited,
    Resolved(Reveal),
}

/// What the caller should show after an accepted input line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    Exit,
    Help(String),
    Resolved(Reveal),
}

/// One game: a committed computer move waiting for the player's choice
pub struct Session {
    engine: OutcomeEngine,
    computer: MoveIndex,
    key: HmacKey,
    commitment: Commitment,
    state: SessionState,
}

impl Session {
    /// Start a game with a computer move and key drawn from the OS random source
    pub fn start(engine: OutcomeEngine) -> Result<Self> {
        Self::start_with_rng(engine, &mut OsRng)
    }

    /// Start a game drawing the computer move and key from `rng`
    pub fn start_with_rng<R: RngCore + CryptoRng>(
        engine: OutcomeEngine,
        rng: &mut R,
    ) -> Result<Self> {
        let key = HmacKey::from_rng(rng)?;
        let choice = rng.gen_range(0..engine.moves().len());
        let computer = engine.moves().index(choice)?;
        Ok(Self::with_computer_move(engine, computer, key))
    }

    /// Start a game with a known computer move and key
    pub fn with_computer_move(engine: OutcomeEngine, computer: MoveIndex, key: HmacKey) -> Self {
        let commitment = Commitment::new(&key, engine.moves().name(computer));
        debug!(moves = engine.moves().len(), %commitment, "committed computer move");
        Self {
            engine,
            computer,
            key,
            commitment,
            state: SessionState::AwaitingInput,
        }
    }

    /// Hash to show before the player moves
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn engine(&self) -> &OutcomeEngine {
        &self.engine
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != SessionState::AwaitingInput
    }

    /// Numbered move list followed by the exit and help entries
    pub fn menu(&self) -> String {
        let mut menu = String::from("Available moves:\n");
        for (index, name) in self.engine.moves().iter() {
            menu.push_str(&format!("{} - {}\n", index.menu_number(), name));
        }
        menu.push_str("0 - exit\n? - help\n");
        menu
    }

    /// Apply one line of player input.
    ///
    /// Invalid tokens leave the session waiting and return a recoverable
    /// [`GameError::InvalidInputToken`].
    pub fn handle(&mut self, line: &str) -> Result<Response> {
        if self.is_finished() {
            return Err(GameError::SessionClosed);
        }

        let command = Command::parse(line, self.engine.moves()).map_err(|e| {
            debug!(error = %e, "rejected input");
            e
        })?;

        match command {
            Command::Exit => {
                debug!("player exited");
                self.state = SessionState::Exited;
                Ok(Response::Exit)
            }
            Command::Help => Ok(Response::Help(render_help_table(&self.engine))),
            Command::Play(player) => {
                let reveal = self.resolve(player);
                self.state = SessionState::Resolved(reveal.clone());
                Ok(Response::Resolved(reveal))
            }
        }
    }

    /// End the session without a reveal, e.g. when input runs out
    pub fn close(&mut self) {
        if !self.is_finished() {
            debug!("input closed before a move was played");
            self.state = SessionState::Exited;
        }
    }

    fn resolve(&self, player: MoveIndex) -> Reveal {
        let moves = self.engine.moves();
        let outcome = self.engine.outcome(player, self.computer);
        info!(
            player = moves.name(player),
            computer = moves.name(self.computer),
            ?outcome,
            "round resolved"
        );
        Reveal {
            player_move: moves.name(player).to_string(),
            computer_move: moves.name(self.computer).to_string(),
            outcome,
            key: self.key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::MoveSet;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn engine() -> OutcomeEngine {
        let moves = MoveSet::new(vec!["Rock".into(), "Paper".into(), "Scissors".into()]).unwrap();
        OutcomeEngine::new(moves)
    }

    fn session_with_computer(name: &str) -> Session {
        let engine = engine();
        let computer = engine.moves().index_of(name).unwrap();
        Session::with_computer_move(engine, computer, HmacKey::from_bytes([7; 32]))
    }

    #[test]
    fn test_commitment_binds_computer_move() {
        let session = session_with_computer("Scissors");
        let key = HmacKey::from_bytes([7; 32]);

        assert!(session.commitment().verify(&key, "Scissors"));
        assert!(!session.commitment().verify(&key, "Rock"));
    }

    #[test]
    fn test_menu() {
        let session = session_with_computer("Rock");

        assert_eq!(
            session.menu(),
            "Available moves:\n1 - Rock\n2 - Paper\n3 - Scissors\n0 - exit\n? - help\n"
        );
    }

    #[test]
    fn test_exit() {
        let mut session = session_with_computer("Rock");

        assert_eq!(session.handle("0").unwrap(), Response::Exit);
        assert_eq!(session.state(), &SessionState::Exited);
        assert!(session.is_finished());
    }

    #[test]
    fn test_help_keeps_waiting() {
        let mut session = session_with_computer("Rock");

        match session.handle("?").unwrap() {
            Response::Help(table) => assert_eq!(table, render_help_table(session.engine())),
            other => panic!("expected help, got {:?}", other),
        }
        assert_eq!(session.state(), &SessionState::AwaitingInput);
    }

    #[test]
    fn test_invalid_token_keeps_waiting() {
        let mut session = session_with_computer("Rock");

        let err = session.handle("banana").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(session.state(), &SessionState::AwaitingInput);
    }

    #[test]
    fn test_play_resolves_and_reveals_key() {
        let mut session = session_with_computer("Rock");

        let reveal = match session.handle("2").unwrap() {
            Response::Resolved(reveal) => reveal,
            other => panic!("expected resolution, got {:?}", other),
        };

        assert_eq!(reveal.player_move, "Paper");
        assert_eq!(reveal.computer_move, "Rock");
        assert_eq!(reveal.outcome, Outcome::FirstWins);
        assert!(session.commitment().verify(&reveal.key, &reveal.computer_move));
        assert_eq!(session.state(), &SessionState::Resolved(reveal));
    }

    #[test]
    fn test_reveal_lines() {
        let mut session = session_with_computer("Paper");

        let reveal = match session.handle("1").unwrap() {
            Response::Resolved(reveal) => reveal,
            other => panic!("expected resolution, got {:?}", other),
        };
        let text = reveal.to_string();
        let lines: Vec<&str> = text.lines().collect();
        let key_line = format!("HMAC key: {}", "07".repeat(32));

        assert_eq!(
            lines,
            vec![
                "Your move: Rock",
                "Computer move: Paper",
                "Computer wins!",
                key_line.as_str(),
            ]
        );
    }

    #[test]
    fn test_no_input_after_finish() {
        let mut session = session_with_computer("Rock");
        session.handle("1").unwrap();

        assert!(matches!(session.handle("0"), Err(GameError::SessionClosed)));
        assert!(matches!(session.handle("?"), Err(GameError::SessionClosed)));
    }

    #[test]
    fn test_close_only_affects_waiting_session() {
        let mut waiting = session_with_computer("Rock");
        waiting.close();
        assert_eq!(waiting.state(), &SessionState::Exited);

        let mut resolved = session_with_computer("Rock");
        resolved.handle("3").unwrap();
        resolved.close();
        assert!(matches!(resolved.state(), SessionState::Resolved(_)));
    }

    #[test]
    fn test_seeded_start_is_reproducible() {
        let a = Session::start_with_rng(engine(), &mut StdRng::seed_from_u64(11)).unwrap();
        let b = Session::start_with_rng(engine(), &mut StdRng::seed_from_u64(11)).unwrap();

        assert_eq!(a.commitment(), b.commitment());
    }

    #[test]
    fn test_computer_move_covers_every_index() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let mut session = Session::start_with_rng(engine(), &mut rng).unwrap();
            if let Response::Resolved(reveal) = session.handle("1").unwrap() {
                let index = session.engine().moves().index_of(&reveal.computer_move).unwrap();
                seen[index.get()] = true;
            }
        }

        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_os_random_start() {
        let session = Session::start(engine()).unwrap();

        assert_eq!(session.state(), &SessionState::AwaitingInput);
    }
}
