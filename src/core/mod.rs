//! Core puzzle types and rules
//!
//! Letter sets, the dictionary, and the judging functions. Nothing in here performs
//! I/O or keeps state between calls; randomness is always passed in.

mod corpus;
pub mod judge;
mod letters;

pub use corpus::Corpus;
pub use judge::{Evaluation, JudgeError, Reason};
pub use letters::{LETTER_COUNT, LetterSet, LetterSetError};
