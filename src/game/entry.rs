//! Letter entry prompt
//!
//! Collects the seven letters of a new puzzle, typed one at a time or generated
//! from the dictionary, before a session starts.

use crate::core::judge::{self, JudgeError};
use crate::core::{Corpus, LETTER_COUNT, LetterSet, LetterSetError};
use rand::Rng;

/// Hint shown under the letters being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMessage {
    DuplicateLetter,
    PressEnter,
    TooFewLetters,
}

impl EntryMessage {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::DuplicateLetter => "Duplicate letter",
            Self::PressEnter => "Press enter",
            Self::TooFewLetters => "Too few letters",
        }
    }
}

/// Letters typed so far for a new puzzle, center letter first
#[derive(Debug, Clone, Default)]
pub struct LetterEntry {
    letters: String,
    message: Option<EntryMessage>,
}

impl LetterEntry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Type a letter
    ///
    /// Non-letters are ignored. A letter already typed, or any letter once seven
    /// are present, is refused.
    pub fn push(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }

        let lower = c.to_ascii_lowercase();
        if self.letters.contains(lower) {
            self.message = Some(EntryMessage::DuplicateLetter);
        } else if self.is_full() {
            self.message = Some(EntryMessage::PressEnter);
        } else {
            self.letters.push(lower);
            self.message = self.is_full().then_some(EntryMessage::PressEnter);
        }
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) {
        self.letters.pop();
        self.message = None;
    }

    /// Replace the typed letters with a generated puzzle
    ///
    /// # Errors
    ///
    /// Returns `JudgeError::EmptyPangramSeed` if the corpus cannot seed a puzzle.
    pub fn randomize<R: Rng + ?Sized>(
        &mut self,
        corpus: &Corpus,
        rng: &mut R,
    ) -> Result<(), JudgeError> {
        let letters = judge::generate_letter_set(corpus.pangram_seed(), rng)?;
        self.letters = letters.to_string();
        self.message = Some(EntryMessage::PressEnter);
        Ok(())
    }

    /// Confirm the typed letters
    ///
    /// # Errors
    ///
    /// Returns `LetterSetError::InvalidLength` if fewer than seven letters were typed.
    pub fn finish(&mut self) -> Result<LetterSet, LetterSetError> {
        let result = LetterSet::new(&self.letters);
        if result.is_err() {
            self.message = Some(EntryMessage::TooFewLetters);
        }
        result
    }

    /// Letters typed so far
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[must_use]
    pub const fn message(&self) -> Option<EntryMessage> {
        self.message
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() == LETTER_COUNT
    }
}
