//! Game session state
//!
//! A session ties one letter set to the shared corpus and tracks the words found
//! so far and the running score.

use crate::core::judge::{self, Reason};
use crate::core::{Corpus, LetterSet};
use rand::Rng;
use std::collections::BTreeMap;

/// A word the player has found, with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    pub word: String,
    pub score: u32,
    pub pangram: bool,
}

/// Result of submitting a word to a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitResult {
    pub accepted: bool,
    pub reason: Option<Reason>,
    pub score_awarded: u32,
    pub pangram: bool,
}

impl SubmitResult {
    const fn unscored(accepted: bool, reason: Reason) -> Self {
        Self {
            accepted,
            reason: Some(reason),
            score_awarded: 0,
            pangram: false,
        }
    }
}

/// One in-progress game
///
/// Found words are keyed by their lowercase text and only ever added to.
pub struct Session<'a> {
    corpus: &'a Corpus,
    letters: LetterSet,
    found: BTreeMap<String, FoundWord>,
    score: u32,
    valid_count: usize,
    possible_score: u32,
}

impl<'a> Session<'a> {
    /// Start a session for a letter set
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::{Corpus, LetterSet};
    /// use spelling_bee::game::Session;
    ///
    /// let corpus = Corpus::from_words(["dolphin", "hold", "pond"]);
    /// let mut session = Session::new(&corpus, LetterSet::new("dolphin").unwrap());
    ///
    /// let result = session.submit("Hold");
    /// assert!(result.accepted);
    /// assert_eq!(result.score_awarded, 1);
    /// assert_eq!(session.score(), 1);
    /// assert!(!session.is_complete());
    /// ```
    #[must_use]
    pub fn new(corpus: &'a Corpus, letters: LetterSet) -> Self {
        let valid = judge::derive_valid_words(&letters, corpus);
        let possible_score: u32 = valid
            .iter()
            .map(|word| judge::compute_score(word, &letters))
            .sum();

        tracing::debug!(
            %letters,
            valid_words = valid.len(),
            possible_score,
            "session started"
        );

        Self {
            corpus,
            letters,
            found: BTreeMap::new(),
            score: 0,
            valid_count: valid.len(),
            possible_score,
        }
    }

    /// Submit a candidate word
    ///
    /// The text is lowercased before judging. A valid word that was already found is
    /// reported as accepted with [`Reason::AlreadyFound`] and awards nothing.
    pub fn submit(&mut self, candidate: &str) -> SubmitResult {
        let word = candidate.to_lowercase();
        let evaluation = judge::evaluate(&word, &self.letters, self.corpus);

        if let Some(reason) = evaluation.reason {
            tracing::debug!(%word, %reason, "submission rejected");
            return SubmitResult::unscored(false, reason);
        }

        if self.found.contains_key(&word) {
            tracing::debug!(%word, "submission already found");
            return SubmitResult::unscored(true, Reason::AlreadyFound);
        }

        let score = judge::compute_score(&word, &self.letters);
        let pangram = judge::is_pangram(&word, &self.letters);
        self.score += score;
        self.found.insert(
            word.clone(),
            FoundWord {
                word: word.clone(),
                score,
                pangram,
            },
        );

        tracing::debug!(%word, score, pangram, total = self.score, "word found");

        SubmitResult {
            accepted: true,
            reason: None,
            score_awarded: score,
            pangram,
        }
    }

    /// Shuffle the outer letters
    ///
    /// Found words and the score are untouched: the accepted words depend only on
    /// which letters are in the set.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.letters = judge::shuffle_non_center(&self.letters, rng);
    }

    /// True once every valid word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.valid_count
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Found words in alphabetical order
    pub fn found_words(&self) -> impl Iterator<Item = &FoundWord> {
        self.found.values()
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Number of words that solve the puzzle
    #[must_use]
    pub const fn valid_count(&self) -> usize {
        self.valid_count
    }

    /// Score for finding every valid word
    #[must_use]
    pub const fn possible_score(&self) -> u32 {
        self.possible_score
    }
}
