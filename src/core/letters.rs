//! Puzzle letter set
//!
//! A `LetterSet` holds the seven distinct letters of a puzzle. Position 0 is the
//! center letter that every accepted word must contain.

use std::fmt;

/// Number of letters in every puzzle
pub const LETTER_COUNT: usize = 7;

/// Seven distinct lowercase letters, center letter first
///
/// Alongside the ordered letters it keeps a 26-bit membership mask, so order-independent
/// questions (is this letter in the puzzle?) never look at the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSet {
    letters: [u8; LETTER_COUNT],
    mask: u32,
}

/// Error type for invalid letter sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LetterSetError {
    InvalidLength(usize),
    InvalidCharacter(char),
    DuplicateLetter(char),
}

impl fmt::Display for LetterSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Puzzle needs exactly {LETTER_COUNT} letters, got {len}")
            }
            Self::InvalidCharacter(c) => write!(f, "'{c}' is not a letter"),
            Self::DuplicateLetter(c) => write!(f, "Letter '{c}' appears more than once"),
        }
    }
}

impl std::error::Error for LetterSetError {}

/// Bit for a lowercase ASCII letter in a 26-bit membership mask
#[inline]
#[must_use]
pub const fn letter_bit(letter: u8) -> u32 {
    1 << (letter - b'a')
}

/// Membership mask of a word's letters
///
/// Returns `None` if the word contains anything other than ASCII letters.
#[must_use]
pub fn letter_mask(word: &str) -> Option<u32> {
    word.bytes().try_fold(0u32, |mask, b| {
        let lower = b.to_ascii_lowercase();
        lower.is_ascii_lowercase().then(|| mask | letter_bit(lower))
    })
}

impl LetterSet {
    /// Create a letter set from text, center letter first
    ///
    /// Input is case-folded.
    ///
    /// # Errors
    /// Returns `LetterSetError` if:
    /// - The text is not exactly 7 characters
    /// - A character is not an ASCII letter
    /// - A letter repeats
    ///
    /// # Examples
    /// ```
    /// use spelling_bee::core::LetterSet;
    ///
    /// let letters = LetterSet::new("DOLPHIN").unwrap();
    /// assert_eq!(letters.center(), 'd');
    /// assert_eq!(letters.to_string(), "dolphin");
    ///
    /// assert!(LetterSet::new("dolphins").is_err());
    /// assert!(LetterSet::new("doolphi").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, LetterSetError> {
        let count = text.chars().count();
        if count != LETTER_COUNT {
            return Err(LetterSetError::InvalidLength(count));
        }

        let mut letters = [0u8; LETTER_COUNT];
        let mut mask = 0u32;

        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return Err(LetterSetError::InvalidCharacter(c));
            }

            let byte = lower as u8;
            let bit = letter_bit(byte);
            if mask & bit != 0 {
                return Err(LetterSetError::DuplicateLetter(lower));
            }

            mask |= bit;
            *slot = byte;
        }

        Ok(Self { letters, mask })
    }

    /// Create a letter set from bytes already known to be distinct lowercase letters
    pub(crate) fn from_letters(letters: [u8; LETTER_COUNT]) -> Self {
        let mask = letters.iter().fold(0, |mask, &b| mask | letter_bit(b));
        debug_assert_eq!(mask.count_ones() as usize, LETTER_COUNT);
        Self { letters, mask }
    }

    /// The center letter
    #[inline]
    #[must_use]
    pub fn center(&self) -> char {
        char::from(self.letters[0])
    }

    /// The center letter as a byte
    #[inline]
    #[must_use]
    pub const fn center_byte(&self) -> u8 {
        self.letters[0]
    }

    /// All seven letters, center first
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; LETTER_COUNT] {
        &self.letters
    }

    /// The six letters around the center, in display order
    #[inline]
    #[must_use]
    pub fn outer(&self) -> &[u8] {
        &self.letters[1..]
    }

    /// 26-bit membership mask
    #[inline]
    #[must_use]
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// Check if a character belongs to the set
    #[inline]
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        c.is_ascii_lowercase() && self.mask & letter_bit(c as u8) != 0
    }

    /// Check if two letter sets hold the same letters, ignoring order and center
    #[inline]
    #[must_use]
    pub const fn same_letters(&self, other: &Self) -> bool {
        self.mask == other.mask
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.letters {
            write!(f, "{}", char::from(b))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_set_valid() {
        let letters = LetterSet::new("dolphin").unwrap();
        assert_eq!(letters.letters(), b"dolphin");
        assert_eq!(letters.center(), 'd');
        assert_eq!(letters.outer(), b"olphin");
    }

    #[test]
    fn letter_set_uppercase_normalized() {
        let letters = LetterSet::new("DolPHin").unwrap();
        assert_eq!(letters.to_string(), "dolphin");
    }

    #[test]
    fn letter_set_invalid_length() {
        assert_eq!(
            LetterSet::new("dolphins"),
            Err(LetterSetError::InvalidLength(8))
        );
        assert_eq!(LetterSet::new("abc"), Err(LetterSetError::InvalidLength(3)));
        assert_eq!(LetterSet::new(""), Err(LetterSetError::InvalidLength(0)));
    }

    #[test]
    fn letter_set_invalid_characters() {
        assert_eq!(
            LetterSet::new("dolph1n"),
            Err(LetterSetError::InvalidCharacter('1'))
        );
        assert_eq!(
            LetterSet::new("dol hin"),
            Err(LetterSetError::InvalidCharacter(' '))
        );
        assert!(LetterSet::new("dolphné").is_err());
    }

    #[test]
    fn letter_set_rejects_duplicates() {
        assert_eq!(
            LetterSet::new("dolphid"),
            Err(LetterSetError::DuplicateLetter('d'))
        );
        assert_eq!(
            LetterSet::new("doLphiL"),
            Err(LetterSetError::DuplicateLetter('l'))
        );
    }

    #[test]
    fn letter_set_contains() {
        let letters = LetterSet::new("dolphin").unwrap();
        for c in "dolphin".chars() {
            assert!(letters.contains(c));
        }
        assert!(!letters.contains('z'));
        assert!(!letters.contains('D'));
        assert!(!letters.contains('é'));
    }

    #[test]
    fn mask_ignores_order() {
        let a = LetterSet::new("dolphin").unwrap();
        let b = LetterSet::new("nihplod").unwrap();
        assert_ne!(a, b);
        assert!(a.same_letters(&b));
        assert_eq!(a.mask().count_ones(), 7);
    }

    #[test]
    fn letter_mask_of_words() {
        assert_eq!(letter_mask("abc"), Some(0b111));
        assert_eq!(letter_mask("ABba"), Some(0b11));
        assert_eq!(letter_mask("a-b"), None);
        assert_eq!(letter_mask(""), Some(0));
    }

    #[test]
    fn letter_set_display() {
        let letters = LetterSet::new("kingdom").unwrap();
        assert_eq!(format!("{letters}"), "kingdom");
    }
}
