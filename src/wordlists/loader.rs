//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::DEFAULT_WORDS;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Load words from a newline-delimited file
///
/// Blank lines are ignored. Lines that are not a single run of letters are
/// skipped with a warning. Words are uppercased.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordsearch::wordlists::loader::load_from_file;
///
/// let words = load_from_file("wordlist.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(words_from_lines(content.lines()))
}

/// Load words from a file, falling back to the embedded default list
///
/// A missing or unreadable file is not an error for the game: it logs a
/// warning and continues with [`DEFAULT_WORDS`].
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Vec<Word> {
    match load_from_file(path) {
        Ok(words) => words,
        Err(err) => {
            warn!("{err}; using default word list");
            words_from_slice(DEFAULT_WORDS)
        }
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordsearch::wordlists::loader::words_from_slice;
/// use wordsearch::wordlists::DEFAULT_WORDS;
///
/// let words = words_from_slice(DEFAULT_WORDS);
/// assert_eq!(words.len(), DEFAULT_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                warn!("skipping word list entry: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("wordsearch-{}-{name}", std::process::id()))
    }

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Dog", "EMU"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
        assert_eq!(words[2].text(), "EMU");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "", "two words", "  ", "dog"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CAT");
        assert_eq!(words[1].text(), "DOG");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_reads_and_uppercases() {
        let path = temp_path("load.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "river\n  Lake \n\nocean").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["RIVER", "LAKE", "OCEAN"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let path = temp_path("does-not-exist.txt");
        let err = load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn load_or_default_falls_back() {
        let words = load_or_default(temp_path("missing.txt"));
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        assert_eq!(
            texts,
            [
                "WORD",
                "SEARCH",
                "PUZZLE",
                "PYTHON",
                "FLASK",
                "GAME",
                "DEVELOPMENT",
                "CHALLENGE",
                "SOLUTION",
                "COMPUTER"
            ]
        );
    }
}
