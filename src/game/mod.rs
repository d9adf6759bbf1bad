//! Game session and its collaborators
//!
//! The session is a small state machine: it starts `Active` with the full
//! attempt budget and ends in `Won` or `Lost`.

pub mod input;
pub mod session;

pub use input::LineSource;
pub use session::{Outcome, Rejection, Session, SessionError, SessionState};

use std::process::ExitCode;

/// Process exit status for every way a run can end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GameExit {
    /// Player guessed the word
    Won = 0,
    /// Invalid command-line arguments
    Usage = 1,
    /// Dictionary could not be opened
    Dictionary = 2,
    /// Attempts exhausted or input ended
    Lost = 3,
    /// Reading or writing the terminal failed mid-run
    Io = 4,
}

impl GameExit {
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl From<Outcome> for GameExit {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Self::Won,
            Outcome::Lost => Self::Lost,
        }
    }
}

impl From<GameExit> for ExitCode {
    fn from(exit: GameExit) -> Self {
        Self::from(exit.code())
    }
}
