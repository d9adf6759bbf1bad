//! Game session state machine
//!
//! One session is one play-through: prompt, read, validate, score, repeat
//! until the word is found, the attempts run out, or the input ends.

use super::LineSource;
use crate::core::{Hint, Word, WordError};
use crate::dictionary::Dictionary;
use crate::output::messages;
use std::io::{self, Write};
use std::num::NonZeroU32;
use thiserror::Error;
use tracing::{debug, trace};

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active { attempts_remaining: u32 },
    Won,
    Lost,
}

impl SessionState {
    /// Check if no further transitions are possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Final result of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Why a guess was turned away without using an attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    WrongLength { expected: usize },
    NotAlphabetic,
    NotInDictionary,
}

impl From<WordError> for Rejection {
    fn from(error: WordError) -> Self {
        match error {
            WordError::InvalidLength { expected, .. } => Self::WrongLength { expected },
            WordError::NonAlphabetic => Self::NotAlphabetic,
        }
    }
}

/// Errors that stop a session without a game outcome
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A single game against a fixed answer
#[derive(Debug)]
pub struct Session {
    answer: Word,
    dictionary: Dictionary,
    state: SessionState,
}

impl Session {
    /// Start a session with the full attempt budget
    ///
    /// The answer must have the dictionary's word length.
    #[must_use]
    pub fn new(answer: Word, dictionary: Dictionary, max_attempts: NonZeroU32) -> Self {
        debug_assert_eq!(answer.len(), dictionary.word_length());
        trace!(answer = %answer, max_attempts = max_attempts.get(), "session created");

        Self {
            answer,
            dictionary,
            state: SessionState::Active {
                attempts_remaining: max_attempts.get(),
            },
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Attempts left; zero once the session has ended
    #[must_use]
    pub const fn attempts_remaining(&self) -> u32 {
        match self.state {
            SessionState::Active { attempts_remaining } => attempts_remaining,
            SessionState::Won | SessionState::Lost => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.dictionary.word_length()
    }

    /// Check a raw input line against the word rules and the dictionary
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` to report to the player.
    pub fn validate(&self, line: &str) -> Result<Word, Rejection> {
        let guess = Word::new(line, self.word_length())?;
        if !self.dictionary.contains(&guess) {
            return Err(Rejection::NotInDictionary);
        }
        Ok(guess)
    }

    /// Run one prompt-and-read cycle
    ///
    /// A rejected guess is reported and leaves the state untouched. A finished
    /// session returns its terminal state without prompting or reading.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if reading input or writing output fails.
    pub fn step<I, W>(&mut self, input: &mut I, out: &mut W) -> Result<SessionState, SessionError>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
    {
        let SessionState::Active { attempts_remaining } = self.state else {
            return Ok(self.state);
        };

        messages::prompt(out, self.word_length(), attempts_remaining)?;

        let Some(line) = input.next_line()? else {
            debug!(attempts_remaining, "input ended");
            self.state = SessionState::Lost;
            return Ok(self.state);
        };

        let guess = match self.validate(&line) {
            Ok(guess) => guess,
            Err(rejection) => {
                debug!(?rejection, "guess rejected");
                messages::rejection(out, &rejection)?;
                return Ok(self.state);
            }
        };

        if guess == self.answer {
            messages::correct(out)?;
            self.state = SessionState::Won;
            debug!(attempts_remaining, "answer found");
            return Ok(self.state);
        }

        let hint = Hint::score(&guess, &self.answer);
        messages::hint(out, &hint)?;

        let attempts_remaining = attempts_remaining - 1;
        self.state = if attempts_remaining == 0 {
            SessionState::Lost
        } else {
            SessionState::Active { attempts_remaining }
        };
        debug!(
            %hint,
            correct = hint.count_correct(),
            present = hint.count_present(),
            attempts_remaining,
            "guess scored"
        );

        Ok(self.state)
    }

    /// Play until the session ends
    ///
    /// Greets the player, steps until a terminal state, and on a loss reveals
    /// the answer on `err`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Io` if reading input or writing output fails.
    pub fn run<I, W, E>(
        &mut self,
        input: &mut I,
        out: &mut W,
        err: &mut E,
    ) -> Result<Outcome, SessionError>
    where
        I: LineSource + ?Sized,
        W: Write + ?Sized,
        E: Write + ?Sized,
    {
        messages::welcome(out)?;

        let mut state = self.state;
        while !state.is_terminal() {
            state = self.step(input, out)?;
        }

        if state == SessionState::Won {
            return Ok(Outcome::Won);
        }
        out.flush()?;
        messages::reveal(err, &self.answer)?;
        Ok(Outcome::Lost)
    }
}
