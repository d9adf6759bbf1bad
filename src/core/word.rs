//! Game word representation
//!
//! A Word is a fixed-length run of ASCII letters, stored lowercase so that
//! equality and hashing are case-insensitive.

use std::fmt;
use thiserror::Error;

/// Shortest word length the game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word length the game accepts
pub const MAX_WORD_LENGTH: usize = 9;

/// A word of a known length, normalized to lowercase ASCII
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
///
/// Length is checked before the alphabet, so a word that is both too long and
/// contains digits reports `InvalidLength`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("word must contain only ASCII letters")]
    NonAlphabetic,
}

impl Word {
    /// Create a new Word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The number of characters is not `length`
    /// - Any character is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle::core::Word;
    ///
    /// let word = Word::new("Crane", 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("crane", 4).is_err());
    /// assert!(Word::new("cr4ne", 5).is_err());
    /// ```
    pub fn new(text: &str, length: usize) -> Result<Self, WordError> {
        let actual = text.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }

        if !text.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordError::NonAlphabetic);
        }

        Ok(Self {
            text: text.to_ascii_lowercase(),
        })
    }

    /// Get the word as a lowercase string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the lowercase letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; present for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count how many times `letter` occurs (case-insensitive)
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        let letter = letter.to_ascii_lowercase();
        self.letters().iter().filter(|&&ch| ch == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane", 5).unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE", 5).unwrap();
        assert_eq!(word2.text(), "crane");
    }

    #[test]
    fn word_creation_other_lengths() {
        assert_eq!(Word::new("cat", 3).unwrap().text(), "cat");
        assert_eq!(Word::new("Abandoned", 9).unwrap().text(), "abandoned");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("too long", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 8
            })
        );
        assert_eq!(
            Word::new("shrt", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert!(matches!(
            Word::new("", 5),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_length_checked_before_alphabet() {
        assert!(matches!(
            Word::new("12", 5),
            Err(WordError::InvalidLength { .. })
        ));
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        // "café" is four characters but five bytes
        assert_eq!(
            Word::new("café", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(Word::new("cafés", 5), Err(WordError::NonAlphabetic));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3", 5), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("cran ", 5), Err(WordError::NonAlphabetic));
        assert_eq!(Word::new("cran!", 5), Err(WordError::NonAlphabetic));
    }

    #[test]
    fn word_count_of() {
        let word = Word::new("speed", 5).unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b'E'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
    }

    #[test]
    fn word_display() {
        let word = Word::new("CRANE", 5).unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_equality_is_case_insensitive() {
        let word1 = Word::new("crane", 5).unwrap();
        let word2 = Word::new("CRANE", 5).unwrap();
        let word3 = Word::new("slate", 5).unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
