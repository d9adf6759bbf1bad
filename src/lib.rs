//! Wordle
//!
//! A terminal word-guessing game: guess the hidden word within a fixed number
//! of attempts, with a letter-by-letter hint after every miss.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle::core::{Hint, Word};
//!
//! let guess = Word::new("slate", 5).unwrap();
//! let answer = Word::new("crane", 5).unwrap();
//!
//! // Uppercase: right place, lowercase: elsewhere in the word, '-': not in it
//! let hint = Hint::score(&guess, &answer);
//! assert_eq!(hint.to_string(), "--A-E");
//! ```

// Core domain types
pub mod core;

// Word loading and answer pool
pub mod dictionary;

// Session state machine and input
pub mod game;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
