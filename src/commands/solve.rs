//! Puzzle solving command
//!
//! Lists every word that solves a letter set.

use crate::core::judge::{compute_score, derive_valid_words, is_pangram};
use crate::core::{Corpus, LetterSet, LetterSetError};

/// Result of solving a puzzle
pub struct SolveResult {
    pub letters: LetterSet,
    pub words: Vec<SolvedWord>,
    pub possible_score: u32,
}

impl SolveResult {
    /// Number of pangrams among the solutions
    #[must_use]
    pub fn pangram_count(&self) -> usize {
        self.words.iter().filter(|w| w.pangram).count()
    }
}

/// A single solution with its score
pub struct SolvedWord {
    pub word: String,
    pub score: u32,
    pub pangram: bool,
}

/// Solve a puzzle given as text, center letter first
///
/// Solutions are sorted by score, highest first, then alphabetically.
///
/// # Errors
///
/// Returns an error if the letters do not form a valid letter set.
pub fn solve_letters(letters: &str, corpus: &Corpus) -> Result<SolveResult, LetterSetError> {
    let letters = LetterSet::new(letters)?;
    Ok(solve(letters, corpus))
}

/// Solve a letter set
#[must_use]
pub fn solve(letters: LetterSet, corpus: &Corpus) -> SolveResult {
    let mut words: Vec<SolvedWord> = derive_valid_words(&letters, corpus)
        .into_iter()
        .map(|word| SolvedWord {
            word: word.to_string(),
            score: compute_score(word, &letters),
            pangram: is_pangram(word, &letters),
        })
        .collect();

    words.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
    let possible_score = words.iter().map(|w| w.score).sum();

    SolveResult {
        letters,
        words,
        possible_score,
    }
}
