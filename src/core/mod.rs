//! Core domain types for the game
//!
//! Words and the hint scorer. Everything here is pure: no I/O, no state
//! beyond the values themselves.

mod hint;
mod word;

pub use hint::{ABSENT_SYMBOL, Hint, Mark};
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
