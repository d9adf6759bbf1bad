//! Play one game in the terminal
//!
//! Loads the dictionary, picks the answer and runs the session, mapping every
//! ending to a process exit status.

use crate::config::GameConfig;
use crate::core::Word;
use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::{GameExit, LineSource, Session, SessionError};
use crate::output::messages;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use tracing::{debug, warn};

/// Run a full game against the configured dictionary
///
/// Dictionary problems are reported on `err` and end the run with
/// `GameExit::Dictionary` before any prompt is shown.
///
/// # Errors
///
/// Returns `SessionError::Io` if reading input or writing output fails.
pub fn run_play<I, W, E>(
    config: &GameConfig,
    input: &mut I,
    out: &mut W,
    err: &mut E,
) -> Result<GameExit, SessionError>
where
    I: LineSource + ?Sized,
    W: Write + ?Sized,
    E: Write + ?Sized,
{
    let dictionary = match Dictionary::load(&config.dictionary, config.word_length) {
        Ok(dictionary) => dictionary,
        Err(error) => {
            warn!(%error, "dictionary unavailable");
            messages::dictionary_error(err, &error)?;
            return Ok(GameExit::Dictionary);
        }
    };

    let Some(answer) = select_answer(&dictionary, config.seed) else {
        let error = DictionaryError::NoWords {
            path: config.dictionary.clone(),
            length: config.word_length,
        };
        messages::dictionary_error(err, &error)?;
        return Ok(GameExit::Dictionary);
    };

    let mut session = Session::new(answer, dictionary, config.max_attempts);
    let outcome = session.run(input, out, err)?;
    Ok(GameExit::from(outcome))
}

/// Pick the answer, reproducibly when a seed is given
#[must_use]
pub fn select_answer(dictionary: &Dictionary, seed: Option<u64>) -> Option<Word> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    debug!(
        seeded = seed.is_some(),
        candidates = dictionary.len(),
        "selecting answer"
    );
    dictionary.choose(&mut rng).cloned()
}
