//! Word judging and scoring
//!
//! Pure functions that classify a candidate against a letter set and corpus,
//! detect pangrams, score words, and build new letter sets from a seeded
//! random source. Nothing here keeps state between calls.

use super::corpus::Corpus;
use super::letters::{LETTER_COUNT, LetterSet, letter_bit, letter_mask};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::fmt;

/// Shortest word the puzzle accepts
pub const MIN_WORD_LENGTH: usize = 4;

/// Bonus added to the length of a pangram
pub const PANGRAM_BONUS: u32 = 7;

/// Why a submission was not scored
///
/// The first four come from [`evaluate`]; `AlreadyFound` is only produced by a
/// session, since re-entering a valid word is not wrong in itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    TooShort,
    NotInDictionary,
    MissingCenterLetter,
    InvalidLetters,
    AlreadyFound,
}

impl Reason {
    /// Player-facing message
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::TooShort => "Too short",
            Self::NotInDictionary => "Not in dictionary",
            Self::MissingCenterLetter => "Missing center letter",
            Self::InvalidLetters => "Bad letters",
            Self::AlreadyFound => "Already found",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Outcome of [`evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub accepted: bool,
    pub reason: Option<Reason>,
}

impl Evaluation {
    const ACCEPTED: Self = Self {
        accepted: true,
        reason: None,
    };

    const fn rejected(reason: Reason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
        }
    }
}

/// Error type for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JudgeError {
    EmptyPangramSeed,
}

impl fmt::Display for JudgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPangramSeed => {
                write!(f, "Dictionary has no word with exactly {LETTER_COUNT} distinct letters")
            }
        }
    }
}

impl std::error::Error for JudgeError {}

/// Check whether a dictionary word can be made from the letter set
///
/// The word must be long enough, contain the center letter, and use only letters
/// from the set. Letters may repeat.
#[inline]
fn is_solution(word: &str, letters: &LetterSet) -> bool {
    word.len() >= MIN_WORD_LENGTH
        && letter_mask(word).is_some_and(|mask| {
            mask & letter_bit(letters.center_byte()) != 0 && mask & !letters.mask() == 0
        })
}

/// All corpus words that solve the letter set, in corpus order
///
/// # Examples
/// ```
/// use spelling_bee::core::{Corpus, LetterSet, judge::derive_valid_words};
///
/// let corpus = Corpus::from_words(["dolphin", "hold", "lion", "old", "hound"]);
/// let letters = LetterSet::new("dolphin").unwrap();
///
/// let words = derive_valid_words(&letters, &corpus);
/// assert_eq!(words, ["dolphin", "hold"]);
/// ```
#[must_use]
pub fn derive_valid_words<'a>(letters: &LetterSet, corpus: &'a Corpus) -> Vec<&'a str> {
    corpus
        .words()
        .iter()
        .map(String::as_str)
        .filter(|word| is_solution(word, letters))
        .collect()
}

/// Classify a candidate against the letter set and corpus
///
/// Checks run in a fixed order and the first failure wins:
/// too short, not in the dictionary, missing the center letter, bad letters.
///
/// # Examples
/// ```
/// use spelling_bee::core::{Corpus, LetterSet};
/// use spelling_bee::core::judge::{Reason, evaluate};
///
/// let corpus = Corpus::from_words(["dolphin", "hold", "lion"]);
/// let letters = LetterSet::new("dolphin").unwrap();
///
/// assert!(evaluate("hold", &letters, &corpus).accepted);
/// assert_eq!(evaluate("lion", &letters, &corpus).reason, Some(Reason::MissingCenterLetter));
/// ```
#[must_use]
pub fn evaluate(candidate: &str, letters: &LetterSet, corpus: &Corpus) -> Evaluation {
    if candidate.chars().count() < MIN_WORD_LENGTH {
        return Evaluation::rejected(Reason::TooShort);
    }

    if !corpus.contains(candidate) {
        return Evaluation::rejected(Reason::NotInDictionary);
    }

    if !candidate.contains(letters.center()) {
        return Evaluation::rejected(Reason::MissingCenterLetter);
    }

    if !candidate.chars().all(|c| letters.contains(c)) {
        return Evaluation::rejected(Reason::InvalidLetters);
    }

    Evaluation::ACCEPTED
}

/// Check if a word uses every letter of the set
///
/// A pangram is at least seven characters long and contains all seven letters,
/// possibly with repeats.
#[must_use]
pub fn is_pangram(word: &str, letters: &LetterSet) -> bool {
    word.chars().count() >= LETTER_COUNT
        && letters
            .letters()
            .iter()
            .all(|&b| word.contains(char::from(b)))
}

/// Score a word
///
/// Four-letter words score 1. Longer words score their length, plus
/// [`PANGRAM_BONUS`] for a pangram. The four-letter rule is checked first.
///
/// # Examples
/// ```
/// use spelling_bee::core::{LetterSet, judge::compute_score};
///
/// let letters = LetterSet::new("dolphin").unwrap();
/// assert_eq!(compute_score("hold", &letters), 1);
/// assert_eq!(compute_score("diploid", &letters), 7);
/// assert_eq!(compute_score("dolphin", &letters), 14);
/// ```
#[must_use]
pub fn compute_score(word: &str, letters: &LetterSet) -> u32 {
    let length = word.chars().count() as u32;

    if length == MIN_WORD_LENGTH as u32 {
        return 1;
    }

    if is_pangram(word, letters) {
        return length + PANGRAM_BONUS;
    }

    length
}

/// Total score available for the letter set
#[must_use]
pub fn possible_score(letters: &LetterSet, corpus: &Corpus) -> u32 {
    derive_valid_words(letters, corpus)
        .into_iter()
        .map(|word| compute_score(word, letters))
        .sum()
}

/// Distinct letters of a seed word, in order of first appearance
///
/// Returns `None` unless the word has exactly seven distinct ASCII letters.
fn distinct_letters(word: &str) -> Option<[u8; LETTER_COUNT]> {
    let mut letters = [0u8; LETTER_COUNT];
    let mut seen = 0u32;
    let mut count = 0;

    for b in word.bytes() {
        if !b.is_ascii_lowercase() {
            return None;
        }
        let bit = letter_bit(b);
        if seen & bit == 0 {
            if count == LETTER_COUNT {
                return None;
            }
            seen |= bit;
            letters[count] = b;
            count += 1;
        }
    }

    (count == LETTER_COUNT).then_some(letters)
}

/// Every letter set a seed word yields, one per choice of center letter
///
/// The outer letters keep the seed's order of first appearance.
#[must_use]
pub fn letter_sets_for_seed(word: &str) -> Vec<LetterSet> {
    let Some(letters) = distinct_letters(word) else {
        return Vec::new();
    };

    (0..LETTER_COUNT)
        .map(|center| {
            let mut ordered = letters;
            ordered[..=center].rotate_right(1);
            LetterSet::from_letters(ordered)
        })
        .collect()
}

/// Generate a random letter set from the pangram seed
///
/// Picks a seed word uniformly, then puts its seven letters in uniformly random
/// order. Whatever lands first is the center, so the seed word is always a
/// solvable pangram.
///
/// # Errors
///
/// Returns `JudgeError::EmptyPangramSeed` if there is no seed word to pick.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use spelling_bee::core::{Corpus, judge::generate_letter_set};
///
/// let corpus = Corpus::from_words(["dolphin"]);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let letters = generate_letter_set(corpus.pangram_seed(), &mut rng).unwrap();
/// assert!(letters.same_letters(&spelling_bee::core::LetterSet::new("dolphin").unwrap()));
/// ```
pub fn generate_letter_set<S, R>(pangram_seed: &[S], rng: &mut R) -> Result<LetterSet, JudgeError>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let seed = pangram_seed
        .choose(rng)
        .ok_or(JudgeError::EmptyPangramSeed)?
        .as_ref();

    // Seed words come from the corpus, which only admits seven-letter sets
    let mut letters = distinct_letters(seed).ok_or(JudgeError::EmptyPangramSeed)?;
    letters.shuffle(rng);

    let generated = LetterSet::from_letters(letters);
    tracing::debug!(seed, letters = %generated, "generated letter set");
    Ok(generated)
}

/// Shuffle the outer letters, keeping the center in place
#[must_use]
pub fn shuffle_non_center<R>(letters: &LetterSet, rng: &mut R) -> LetterSet
where
    R: Rng + ?Sized,
{
    let mut shuffled = *letters.letters();
    shuffled[1..].shuffle(rng);
    LetterSet::from_letters(shuffled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corpus() -> Corpus {
        Corpus::from_words([
            "dolphin", "hold", "holding", "idol", "lido", "diploid", "pond", "plod", "lion", "loin",
            "hound", "blind", "old", "hid", "holiday", "kingdom",
        ])
    }

    fn dolphin() -> LetterSet {
        LetterSet::new("dolphin").unwrap()
    }

    #[test]
    fn derive_valid_words_filters_by_rules() {
        let corpus = corpus();
        let words = derive_valid_words(&dolphin(), &corpus);
        assert_eq!(
            words,
            ["dolphin", "hold", "idol", "lido", "diploid", "pond", "plod"]
        );
    }

    #[test]
    fn derive_valid_words_ignores_outer_order() {
        let corpus = corpus();
        let a = derive_valid_words(&dolphin(), &corpus);
        let b = derive_valid_words(&LetterSet::new("dnihplo").unwrap(), &corpus);
        assert_eq!(a, b);
    }

    #[test]
    fn derive_valid_words_depends_on_center() {
        let corpus = corpus();
        let words = derive_valid_words(&LetterSet::new("ldophin").unwrap(), &corpus);
        assert_eq!(
            words,
            ["dolphin", "hold", "idol", "lido", "diploid", "plod", "lion", "loin"]
        );
    }

    #[test]
    fn evaluate_too_short_wins_over_everything() {
        let corpus = corpus();
        for word in ["", "d", "old", "hid", "zzz", "xyz"] {
            let result = evaluate(word, &dolphin(), &corpus);
            assert!(!result.accepted);
            assert_eq!(result.reason, Some(Reason::TooShort), "word {word:?}");
        }
    }

    #[test]
    fn evaluate_not_in_dictionary_before_letter_checks() {
        let corpus = corpus();
        // Uses only puzzle letters but is not a word
        let result = evaluate("dolp", &dolphin(), &corpus);
        assert_eq!(result.reason, Some(Reason::NotInDictionary));

        // Bad letters and no center, still reported as unknown
        let result = evaluate("zebra", &dolphin(), &corpus);
        assert_eq!(result.reason, Some(Reason::NotInDictionary));
    }

    #[test]
    fn evaluate_missing_center_before_bad_letters() {
        let corpus = corpus();
        assert_eq!(
            evaluate("lion", &dolphin(), &corpus).reason,
            Some(Reason::MissingCenterLetter)
        );
        assert_eq!(
            evaluate("kingdom", &LetterSet::new("zolphin").unwrap(), &corpus).reason,
            Some(Reason::MissingCenterLetter)
        );
    }

    #[test]
    fn evaluate_bad_letters() {
        let corpus = corpus();
        assert_eq!(
            evaluate("hound", &dolphin(), &corpus).reason,
            Some(Reason::InvalidLetters)
        );
        assert_eq!(
            evaluate("holding", &dolphin(), &corpus).reason,
            Some(Reason::InvalidLetters)
        );
    }

    #[test]
    fn evaluate_accepts_every_valid_word() {
        let corpus = corpus();
        let letters = dolphin();
        for word in derive_valid_words(&letters, &corpus) {
            let result = evaluate(word, &letters, &corpus);
            assert_eq!(result, Evaluation::ACCEPTED, "word {word}");
        }
    }

    #[test]
    fn evaluate_is_case_sensitive() {
        // Case folding is the caller's job
        let corpus = corpus();
        assert_eq!(
            evaluate("HOLD", &dolphin(), &corpus).reason,
            Some(Reason::NotInDictionary)
        );
    }

    #[test]
    fn pangram_detection() {
        let letters = dolphin();
        assert!(is_pangram("dolphin", &letters));
        assert!(is_pangram("dolphinnnn", &letters));
        assert!(!is_pangram("diploid", &letters));
        assert!(!is_pangram("hold", &letters));
        // Every letter present is not enough if the word is short
        assert!(!is_pangram("", &letters));
    }

    #[test]
    fn pangram_ignores_outer_order() {
        assert!(is_pangram("dolphin", &LetterSet::new("hpdolin").unwrap()));
    }

    #[test]
    fn score_rules() {
        let letters = dolphin();
        assert_eq!(compute_score("hold", &letters), 1);
        assert_eq!(compute_score("lipid", &letters), 5);
        assert_eq!(compute_score("diploid", &letters), 7);
        assert_eq!(compute_score("dolphin", &letters), 14);
        // Longer pangram with a repeated letter
        assert_eq!(compute_score("dolphinn", &letters), 15);
    }

    #[test]
    fn score_always_positive_for_valid_words() {
        let corpus = corpus();
        let letters = dolphin();
        for word in derive_valid_words(&letters, &corpus) {
            assert!(compute_score(word, &letters) >= 1);
        }
    }

    #[test]
    fn possible_score_sums_valid_words() {
        let corpus = corpus();
        // dolphin 14, hold 1, idol 1, lido 1, diploid 7, pond 1, plod 1
        assert_eq!(possible_score(&dolphin(), &corpus), 26);
    }

    #[test]
    fn distinct_letters_of_seed() {
        assert_eq!(distinct_letters("dolphin"), Some(*b"dolphin"));
        assert_eq!(distinct_letters("holiday"), Some(*b"holiday"));
        assert_eq!(distinct_letters("bracelet"), Some(*b"bracelt"));
        assert_eq!(distinct_letters("capable"), None);
        assert_eq!(distinct_letters("absolute"), None);
    }

    #[test]
    fn letter_sets_for_seed_cover_each_center() {
        let sets = letter_sets_for_seed("dolphin");
        assert_eq!(sets.len(), 7);

        let centers: String = sets.iter().map(LetterSet::center).collect();
        assert_eq!(centers, "dolphin");
        assert_eq!(sets[3].to_string(), "pdolhin");
        assert!(sets.iter().all(|s| s.same_letters(&sets[0])));

        assert!(letter_sets_for_seed("capable").is_empty());
    }

    #[test]
    fn generate_from_empty_seed_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let seed: [&str; 0] = [];
        assert_eq!(
            generate_letter_set(&seed, &mut rng),
            Err(JudgeError::EmptyPangramSeed)
        );
    }

    #[test]
    fn generated_set_is_solvable_by_its_seed() {
        let corpus = corpus();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let letters = generate_letter_set(corpus.pangram_seed(), &mut rng).unwrap();
            let pangrams: Vec<_> = derive_valid_words(&letters, &corpus)
                .into_iter()
                .filter(|w| is_pangram(w, &letters))
                .collect();
            assert!(!pangrams.is_empty(), "no pangram for {letters}");
        }
    }

    #[test]
    fn generation_is_reproducible() {
        let corpus = corpus();
        let a = generate_letter_set(corpus.pangram_seed(), &mut StdRng::seed_from_u64(9));
        let b = generate_letter_set(corpus.pangram_seed(), &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn generation_varies_the_center() {
        let seed = ["dolphin"];
        let mut rng = StdRng::seed_from_u64(3);
        let centers: std::collections::HashSet<char> = (0..200)
            .map(|_| generate_letter_set(&seed, &mut rng).unwrap().center())
            .collect();
        assert_eq!(centers.len(), 7);
    }

    #[test]
    fn shuffle_keeps_center_and_letters() {
        let letters = dolphin();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            let shuffled = shuffle_non_center(&letters, &mut rng);
            assert_eq!(shuffled.center(), 'd');
            assert!(shuffled.same_letters(&letters));
        }
    }

    #[test]
    fn shuffle_reorders_outer_letters() {
        let letters = dolphin();
        let mut expected = letters.outer().to_vec();
        expected.sort_unstable();

        let mut rng = StdRng::seed_from_u64(5);
        let mut orders = std::collections::HashSet::new();
        let mut first_slot = std::collections::HashSet::new();

        for _ in 0..200 {
            let shuffled = shuffle_non_center(&letters, &mut rng);
            let mut outer = shuffled.outer().to_vec();
            orders.insert(outer.clone());
            first_slot.insert(outer[0]);

            outer.sort_unstable();
            assert_eq!(outer, expected);
        }

        assert!(orders.len() > 1);
        assert_eq!(first_slot.len(), 6);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let letters = dolphin();
        let a = shuffle_non_center(&letters, &mut StdRng::seed_from_u64(11));
        let b = shuffle_non_center(&letters, &mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }

    #[test]
    fn score_invariant_under_shuffle() {
        let corpus = corpus();
        let letters = dolphin();
        let mut rng = StdRng::seed_from_u64(17);
        let shuffled = shuffle_non_center(&letters, &mut rng);

        for word in corpus.words() {
            assert_eq!(
                compute_score(word, &letters),
                compute_score(word, &shuffled)
            );
        }
        assert_eq!(
            derive_valid_words(&letters, &corpus),
            derive_valid_words(&shuffled, &corpus)
        );
    }
}
