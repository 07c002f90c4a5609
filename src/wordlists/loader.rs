//! Word list loading utilities
//!
//! Reads one-word-per-line files for building a custom corpus.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the non-blank lines, trimmed. Normalisation and filtering happen when
/// the words are turned into a [`Corpus`](crate::core::Corpus).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use spelling_bee::core::Corpus;
/// use spelling_bee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// let corpus = Corpus::from_words(&words);
/// println!("Loaded {} words", corpus.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split file contents into words, one per line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
