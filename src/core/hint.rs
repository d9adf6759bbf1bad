//! Letter-by-letter hint calculation and rendering
//!
//! A hint classifies each guess position as one of:
//! - Correct: the letter is in this exact position (rendered uppercase)
//! - Present: the letter occurs elsewhere and is not yet accounted for (rendered lowercase)
//! - Absent: the letter is not in the answer, or every occurrence is already used (rendered `-`)

use super::Word;
use std::fmt;

/// Placeholder symbol for an absent letter
pub const ABSENT_SYMBOL: char = '-';

/// Classification of a single guess position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Correct,
    Present,
    Absent,
}

/// Feedback for one guess against the answer
///
/// Stores the guessed letter alongside its mark so the hint can be rendered
/// without the original guess.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hint {
    letters: Vec<u8>,
    marks: Vec<Mark>,
}

impl Hint {
    /// Score `guess` against `answer`
    ///
    /// Both words must have the same length; the session guarantees this by
    /// validating every guess before it gets here.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches and consume both letters
    /// 2. Second pass: for each remaining guess letter, claim the leftmost
    ///    unconsumed answer letter equal to it
    ///
    /// A guess letter is therefore credited at most as many times as the
    /// answer holds it.
    ///
    /// # Examples
    /// ```
    /// use wordle::core::{Hint, Word};
    ///
    /// let guess = Word::new("speed", 5).unwrap();
    /// let answer = Word::new("erase", 5).unwrap();
    ///
    /// assert_eq!(Hint::score(&guess, &answer).to_string(), "s-ee-");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

        let letters = guess.letters().to_vec();
        let mut marks = vec![Mark::Absent; letters.len()];
        let mut remaining: Vec<Option<u8>> = answer.letters().iter().copied().map(Some).collect();

        // First pass: exact matches
        for ((mark, &letter), slot) in marks.iter_mut().zip(&letters).zip(remaining.iter_mut()) {
            if *slot == Some(letter) {
                *mark = Mark::Correct;
                *slot = None;
            }
        }

        // Second pass: present elsewhere, leftmost unconsumed answer letter wins
        for (mark, &letter) in marks.iter_mut().zip(&letters) {
            if *mark != Mark::Absent {
                continue;
            }
            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                *mark = Mark::Present;
                *slot = None;
            }
        }

        Self { letters, marks }
    }

    /// Per-position classification
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.marks.iter().all(|&mark| mark == Mark::Correct)
    }

    /// Count the number of correct positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Mark::Correct)
    }

    /// Count the number of present-elsewhere positions
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.count(Mark::Present)
    }

    /// Count positions crediting `letter` as either correct or present
    #[must_use]
    pub fn credited(&self, letter: u8) -> usize {
        let letter = letter.to_ascii_lowercase();
        self.letters
            .iter()
            .zip(&self.marks)
            .filter(|&(&ch, &mark)| ch == letter && mark != Mark::Absent)
            .count()
    }

    fn count(&self, wanted: Mark) -> usize {
        self.marks.iter().filter(|&&mark| mark == wanted).count()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (&letter, &mark) in self.letters.iter().zip(&self.marks) {
            let symbol = match mark {
                Mark::Correct => char::from(letter.to_ascii_uppercase()),
                Mark::Present => char::from(letter.to_ascii_lowercase()),
                Mark::Absent => ABSENT_SYMBOL,
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
