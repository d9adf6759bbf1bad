//! User-visible text
//!
//! Every line the game shows the player is written here, so the wording lives
//! in one place and stays byte-stable for scripted play.

use crate::core::{Hint, Word};
use crate::dictionary::DictionaryError;
use crate::game::Rejection;
use std::io::{self, Write};

/// Command-line usage line
pub const USAGE: &str = "Usage: wordle [-len word-length] [-max max-guesses] [dictionary]";

/// Greeting printed once before the first prompt
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn welcome<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Welcome to Wordle!")
}

/// Prompt for the next guess
///
/// The final attempt gets its own wording.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn prompt<W: Write + ?Sized>(
    out: &mut W,
    word_length: usize,
    attempts_remaining: u32,
) -> io::Result<()> {
    if attempts_remaining == 1 {
        writeln!(out, "Enter a {word_length} letter word (last attempt):")?;
    } else {
        writeln!(
            out,
            "Enter a {word_length} letter word ({attempts_remaining} attempts remaining):"
        )?;
    }
    out.flush()
}

/// One diagnostic line for a rejected guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn rejection<W: Write + ?Sized>(out: &mut W, rejection: &Rejection) -> io::Result<()> {
    match rejection {
        Rejection::WrongLength { expected } => {
            writeln!(out, "Words must be {expected} letters long - try again.")
        }
        Rejection::NotAlphabetic => writeln!(out, "Words must contain only letters - try again."),
        Rejection::NotInDictionary => {
            writeln!(out, "Word not found in the dictionary - try again.")
        }
    }
}

/// Hint line for a scored guess
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn hint<W: Write + ?Sized>(out: &mut W, hint: &Hint) -> io::Result<()> {
    writeln!(out, "{hint}")
}

/// Success line for a guess matching the answer
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn correct<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Correct!")
}

/// Loss message revealing the answer
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn reveal<W: Write + ?Sized>(err: &mut W, answer: &Word) -> io::Result<()> {
    writeln!(err, "Bad luck - the word is \"{answer}\".")?;
    err.flush()
}

/// Fatal dictionary problem, reported before any game starts
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn dictionary_error<W: Write + ?Sized>(
    err: &mut W,
    error: &DictionaryError,
) -> io::Result<()> {
    writeln!(err, "wordle: {error}")?;
    err.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn prompt_last_attempt() {
        let text = render(|out| prompt(out, 5, 1));
        assert_eq!(text, "Enter a 5 letter word (last attempt):\n");
    }

    #[rstest]
    #[case(5, 6, "Enter a 5 letter word (6 attempts remaining):\n")]
    #[case(3, 2, "Enter a 3 letter word (2 attempts remaining):\n")]
    #[case(9, 10, "Enter a 9 letter word (10 attempts remaining):\n")]
    fn prompt_several_attempts(
        #[case] length: usize,
        #[case] attempts: u32,
        #[case] expected: &str,
    ) {
        assert_eq!(render(|out| prompt(out, length, attempts)), expected);
    }

    #[test]
    fn wrong_length_names_expected_length() {
        let reason = Rejection::WrongLength { expected: 7 };
        let text = render(|out| rejection(out, &reason));
        assert_eq!(text, "Words must be 7 letters long - try again.\n");
    }

    #[rstest]
    #[case(
        Rejection::NotAlphabetic,
        "Words must contain only letters - try again.\n"
    )]
    #[case(
        Rejection::NotInDictionary,
        "Word not found in the dictionary - try again.\n"
    )]
    fn rejection_messages(#[case] reason: Rejection, #[case] expected: &str) {
        assert_eq!(render(|out| rejection(out, &reason)), expected);
    }

    #[test]
    fn reveal_quotes_answer() {
        let answer = Word::new("MANGO", 5).unwrap();
        let text = render(|err| reveal(err, &answer));
        assert_eq!(text, "Bad luck - the word is \"mango\".\n");
    }

    #[test]
    fn dictionary_error_names_file() {
        let error = DictionaryError::NoWords {
            path: PathBuf::from("words.txt"),
            length: 7,
        };
        let text = render(|err| dictionary_error(err, &error));
        assert_eq!(
            text,
            "wordle: dictionary file \"words.txt\" has no 7 letter words\n"
        );
    }
}
