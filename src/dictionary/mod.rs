//! Dictionary of playable words
//!
//! Built once before a game starts and owned by the session afterward. Holds
//! every accepted word of a single length, in file order, with a hash index
//! for case-insensitive membership checks.

pub mod loader;

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default dictionary location on Unix systems
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Errors raised while building a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary file \"{}\" cannot be opened", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary file \"{}\" has no {length} letter words", .path.display())]
    NoWords { path: PathBuf, length: usize },
}

/// Set of playable words of one length
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl Dictionary {
    /// Create an empty dictionary for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            words: Vec::new(),
            index: FxHashSet::default(),
        }
    }

    /// Build a dictionary from already-parsed words
    ///
    /// Words of the wrong length are skipped; duplicates keep their first
    /// position.
    ///
    /// # Examples
    /// ```
    /// use wordle::core::Word;
    /// use wordle::dictionary::Dictionary;
    ///
    /// let words = ["crane", "slate"].map(|w| Word::new(w, 5).unwrap());
    /// let dictionary = Dictionary::from_words(5, words);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains(&Word::new("SLATE", 5).unwrap()));
    /// ```
    #[must_use]
    pub fn from_words(word_length: usize, words: impl IntoIterator<Item = Word>) -> Self {
        let mut dictionary = Self::new(word_length);
        for word in words {
            dictionary.insert(word);
        }
        dictionary
    }

    /// Load every `word_length` letter word from the file at `path`
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Open` if the file cannot be read, and
    /// `DictionaryError::NoWords` if it holds no word of the requested length.
    pub fn load(path: impl AsRef<Path>, word_length: usize) -> Result<Self, DictionaryError> {
        loader::load_from_file(path, word_length)
    }

    /// Add a word, returning false if it was already present or has the wrong length
    pub fn insert(&mut self, word: Word) -> bool {
        if word.len() != self.word_length || !self.index.insert(word.clone()) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Check membership (words are stored lowercase, so this is case-insensitive)
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Pick a uniformly random word using the caller's random source
    ///
    /// Returns `None` for an empty dictionary.
    #[must_use]
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over words in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
