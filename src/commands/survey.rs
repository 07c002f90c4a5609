//! Survey every puzzle the dictionary can generate
//!
//! Each pangram seed yields seven puzzles, one per center letter. Seeds that share
//! a letter set yield the same puzzles, which are counted once.

use crate::core::judge::{derive_valid_words, is_pangram, letter_sets_for_seed, possible_score};
use crate::core::{Corpus, LetterSet};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Size of a single puzzle
#[derive(Debug, Clone)]
pub struct PuzzleStats {
    pub letters: LetterSet,
    pub valid_words: usize,
    pub pangrams: usize,
    pub possible_score: u32,
}

/// Statistics over all surveyed puzzles
#[derive(Debug)]
pub struct SurveyStatistics {
    pub seeds: usize,
    pub puzzles: usize,
    pub average_words: f64,
    pub average_score: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub richest: Option<PuzzleStats>,
    pub poorest: Option<PuzzleStats>,
    pub duration: Duration,
}

/// Measure one puzzle
#[must_use]
pub fn puzzle_stats(letters: LetterSet, corpus: &Corpus) -> PuzzleStats {
    let words = derive_valid_words(&letters, corpus);
    PuzzleStats {
        letters,
        valid_words: words.len(),
        pangrams: words.iter().filter(|w| is_pangram(w, &letters)).count(),
        possible_score: possible_score(&letters, corpus),
    }
}

/// Distinct puzzles from the first `limit` seed words
fn distinct_puzzles(corpus: &Corpus, limit: Option<usize>) -> (usize, Vec<LetterSet>) {
    let seeds = corpus.pangram_seed();
    let seeds = &seeds[..limit.unwrap_or(seeds.len()).min(seeds.len())];

    let mut seen: FxHashSet<(u32, u8)> = FxHashSet::default();
    let puzzles = seeds
        .iter()
        .flat_map(|seed| letter_sets_for_seed(seed))
        .filter(|letters| seen.insert((letters.mask(), letters.center_byte())))
        .collect();

    (seeds.len(), puzzles)
}

/// Survey the puzzles derivable from the corpus
///
/// Puzzles are measured in parallel; `limit` caps the number of seed words used.
pub fn run_survey(corpus: &Corpus, limit: Option<usize>, show_progress: bool) -> SurveyStatistics {
    let start = Instant::now();
    let (seeds, puzzles) = distinct_puzzles(corpus, limit);

    tracing::info!(seeds, puzzles = puzzles.len(), "surveying puzzles");

    let pb = if show_progress {
        ProgressBar::new(puzzles.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let stats: Vec<PuzzleStats> = puzzles
        .par_iter()
        .map(|&letters| {
            let stats = puzzle_stats(letters, corpus);
            pb.inc(1);
            stats
        })
        .collect();

    pb.finish_with_message("Complete!");

    let count = stats.len();
    let total_words: usize = stats.iter().map(|s| s.valid_words).sum();
    let total_score: u64 = stats.iter().map(|s| u64::from(s.possible_score)).sum();

    let richest = stats
        .iter()
        .max_by(|a, b| {
            a.valid_words
                .cmp(&b.valid_words)
                .then_with(|| b.letters.to_string().cmp(&a.letters.to_string()))
        })
        .cloned();
    let poorest = stats
        .iter()
        .min_by(|a, b| {
            a.valid_words
                .cmp(&b.valid_words)
                .then_with(|| a.letters.to_string().cmp(&b.letters.to_string()))
        })
        .cloned();

    SurveyStatistics {
        seeds,
        puzzles: count,
        average_words: if count > 0 {
            total_words as f64 / count as f64
        } else {
            0.0
        },
        average_score: if count > 0 {
            total_score as f64 / count as f64
        } else {
            0.0
        },
        min_words: poorest.as_ref().map_or(0, |p| p.valid_words),
        max_words: richest.as_ref().map_or(0, |p| p.valid_words),
        richest,
        poorest,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        Corpus::from_words([
            "dolphin", "hold", "idol", "lido", "pond", "lion", "loin", "holiday", "daily", "hold",
        ])
    }

    #[test]
    fn each_center_is_a_puzzle() {
        let (seeds, puzzles) = distinct_puzzles(&corpus(), None);
        assert_eq!(seeds, 2);
        assert_eq!(puzzles.len(), 14);
    }

    #[test]
    fn anagram_seeds_counted_once() {
        let corpus = Corpus::from_words(["dolphin", "nihplod"]);
        let (seeds, puzzles) = distinct_puzzles(&corpus, None);
        assert_eq!(seeds, 2);
        assert_eq!(puzzles.len(), 7);
    }

    #[test]
    fn limit_caps_seeds() {
        let (seeds, puzzles) = distinct_puzzles(&corpus(), Some(1));
        assert_eq!(seeds, 1);
        assert_eq!(puzzles.len(), 7);

        let (seeds, _) = distinct_puzzles(&corpus(), Some(50));
        assert_eq!(seeds, 2);
    }

    #[test]
    fn puzzle_stats_counts_words() {
        let stats = puzzle_stats(LetterSet::new("dolphin").unwrap(), &corpus());
        // dolphin, hold, idol, lido, pond
        assert_eq!(stats.valid_words, 5);
        assert_eq!(stats.pangrams, 1);
        assert_eq!(stats.possible_score, 14 + 4);
    }

    #[test]
    fn survey_summarizes() {
        let stats = run_survey(&corpus(), None, false);
        assert_eq!(stats.puzzles, 14);
        assert!(stats.min_words >= 1, "every puzzle has its seed");
        assert!(stats.max_words >= stats.min_words);
        assert!(stats.average_words >= stats.min_words as f64);
        assert!(stats.average_words <= stats.max_words as f64);

        let richest = stats.richest.unwrap();
        assert_eq!(richest.valid_words, stats.max_words);
    }

    #[test]
    fn survey_empty_corpus() {
        let stats = run_survey(&Corpus::default(), None, false);
        assert_eq!(stats.puzzles, 0);
        assert!(stats.average_words.abs() < f64::EPSILON);
        assert!(stats.richest.is_none());
    }
}
