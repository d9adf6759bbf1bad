//! Dictionary loading utilities
//!
//! Reads a word file and keeps the whitespace-separated tokens that are
//! playable at the requested length.

use super::{Dictionary, DictionaryError};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a dictionary from a file
///
/// The file is read as bytes and decoded lossily, so a word list in a legacy
/// encoding still yields its ASCII words.
///
/// # Errors
///
/// Returns `DictionaryError::Open` if the file cannot be opened or read, and
/// `DictionaryError::NoWords` if no token survives filtering.
///
/// # Examples
/// ```no_run
/// use wordle::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("/usr/share/dict/words", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    length: usize,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8_lossy(&bytes);
    let dictionary = Dictionary::from_words(length, words_from_text(&content, length));

    debug!(
        path = %path.display(),
        length,
        words = dictionary.len(),
        "loaded dictionary"
    );

    if dictionary.is_empty() {
        return Err(DictionaryError::NoWords {
            path: path.to_path_buf(),
            length,
        });
    }

    Ok(dictionary)
}

/// Parse every playable `length` letter word out of `text`
///
/// Tokens are split on whitespace; anything that is not purely ASCII letters
/// of the right length is skipped.
///
/// # Examples
/// ```
/// use wordle::dictionary::loader::words_from_text;
///
/// let words = words_from_text("crane\nCrane's\nslate  it\n", 5);
/// assert_eq!(words.len(), 2);
/// ```
#[must_use]
pub fn words_from_text(text: &str, length: usize) -> Vec<Word> {
    text.split_whitespace()
        .filter_map(|token| Word::new(token, length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn dictionary_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn words_from_text_converts_valid_words() {
        let words = words_from_text("crane\nslate\nirate\n", 5);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_text_skips_invalid() {
        let words = words_from_text("crane toolong abc sl4te\nSLATE\n", 5);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_text_other_length() {
        let words = words_from_text("cat dog horse emu", 3);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "dog", "emu"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("", 5).is_empty());
    }

    #[test]
    fn load_from_file_filters_and_deduplicates() {
        let file = dictionary_file(b"Crane\ncrane\nslate\nbrown's\nx\n");
        let dictionary = load_from_file(file.path(), 5).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.word_length(), 5);
    }

    #[test]
    fn load_from_file_tolerates_non_utf8() {
        let file = dictionary_file(b"caf\xe9s\nmango\n");
        let dictionary = load_from_file(file.path(), 5).unwrap();

        let texts: Vec<&str> = dictionary.iter().map(Word::text).collect();
        assert_eq!(texts, ["mango"]);
    }

    #[test]
    fn load_from_missing_file_is_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");

        let error = load_from_file(&missing, 5).unwrap_err();
        assert!(matches!(error, DictionaryError::Open { .. }));
        assert_eq!(
            error.to_string(),
            format!("dictionary file \"{}\" cannot be opened", missing.display())
        );
    }

    #[test]
    fn load_without_matching_words_is_no_words_error() {
        let file = dictionary_file(b"cat\ndog\n");
        let error = load_from_file(file.path(), 5).unwrap_err();

        assert!(matches!(error, DictionaryError::NoWords { length: 5, .. }));
    }
}
