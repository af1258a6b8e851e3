//! Word lists for puzzle generation
//!
//! Provides the embedded default list and [`WordSource`], the thing a
//! session reloads from on every reset.

mod embedded;
pub mod loader;

pub use embedded::{DEFAULT_WORDS, DEFAULT_WORDS_COUNT};
pub use loader::WordListError;

use crate::core::Word;
use std::path::PathBuf;

/// The embedded default list as validated words
#[must_use]
pub fn default_words() -> Vec<Word> {
    loader::words_from_slice(DEFAULT_WORDS)
}

/// Where a session gets its words from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// Newline-delimited file, read again on every load
    File(PathBuf),
    /// A fixed in-memory list
    Words(Vec<Word>),
    /// The embedded default list
    Default,
}

impl WordSource {
    /// Load the current word list
    ///
    /// Never fails: an unreadable file falls back to the default list.
    #[must_use]
    pub fn load(&self) -> Vec<Word> {
        match self {
            Self::File(path) => loader::load_or_default(path),
            Self::Words(words) => words.clone(),
            Self::Default => default_words(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_count_matches_const() {
        assert_eq!(DEFAULT_WORDS.len(), DEFAULT_WORDS_COUNT);
        assert_eq!(DEFAULT_WORDS_COUNT, 10, "Expected the ten-word default list");
    }

    #[test]
    fn default_words_are_valid() {
        let words = default_words();
        assert_eq!(words.len(), DEFAULT_WORDS_COUNT);
        assert!(words.iter().all(|w| w.text().bytes().all(|b| b.is_ascii_uppercase())));
    }

    #[test]
    fn missing_file_source_loads_default() {
        let source = WordSource::File(PathBuf::from("/nonexistent/wordsearch/wordlist.txt"));
        assert_eq!(source.load(), default_words());
    }

    #[test]
    fn fixed_source_returns_its_words() {
        let words = vec![Word::new("owl").unwrap()];
        assert_eq!(WordSource::Words(words.clone()).load(), words);
        assert_eq!(WordSource::Default.load(), default_words());
    }
}
