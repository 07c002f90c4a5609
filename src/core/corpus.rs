//! Dictionary of accepted words
//!
//! The corpus is built once from a word source and shared by reference between
//! sessions. It also derives the pangram seed: words with exactly seven distinct
//! letters, from which new puzzles are generated.

use super::letters::{LETTER_COUNT, letter_mask};
use rustc_hash::FxHashSet;

/// Immutable word dictionary with its pangram seed
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    pangram_seed: Vec<String>,
}

impl Corpus {
    /// Build a corpus from raw word entries
    ///
    /// Entries are trimmed and lowercased. Blank entries, duplicates, and entries
    /// containing anything other than ASCII letters are dropped. Load order is kept
    /// so that seeded puzzle generation is reproducible.
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::Corpus;
    ///
    /// let corpus = Corpus::from_words(["Dolphin", "hold", "hold", "", "it's"]);
    /// assert_eq!(corpus.len(), 2);
    /// assert!(corpus.contains("dolphin"));
    /// assert_eq!(corpus.pangram_seed(), ["dolphin"]);
    /// ```
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::default();
        let mut skipped = 0usize;

        for entry in entries {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }

            let Some(mask) = letter_mask(&word) else {
                skipped += 1;
                continue;
            };

            if corpus.lookup.contains(&word) {
                continue;
            }

            if mask.count_ones() as usize == LETTER_COUNT {
                corpus.pangram_seed.push(word.clone());
            }
            corpus.lookup.insert(word.clone());
            corpus.words.push(word);
        }

        if skipped > 0 {
            tracing::warn!(skipped, "skipped word list entries with non-letter characters");
        }
        tracing::debug!(
            words = corpus.words.len(),
            pangram_seed = corpus.pangram_seed.len(),
            "corpus built"
        );

        corpus
    }

    /// Check if a word is in the dictionary
    ///
    /// Lookup is exact: callers are expected to pass lowercase text.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    /// All words, in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Words with exactly seven distinct letters, in load order
    #[inline]
    #[must_use]
    pub fn pangram_seed(&self) -> &[String] {
        &self.pangram_seed
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
}
