//! Game configuration
//!
//! Plain values handed to the game by the command line. Range checks happen
//! at parse time, so a `GameConfig` is always playable.

use crate::dictionary::DEFAULT_DICTIONARY;
use std::num::NonZeroU32;
use std::path::PathBuf;

/// Default number of letters per word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Default number of scored guesses
pub const DEFAULT_MAX_ATTEMPTS: NonZeroU32 = match NonZeroU32::new(6) {
    Some(attempts) => attempts,
    None => panic!("default attempt budget must be non-zero"),
};

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: NonZeroU32,
    pub dictionary: PathBuf,
    /// Seed for answer selection; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            seed: None,
        }
    }
}
