//! Word lists for the puzzle
//!
//! Provides the embedded dictionary compiled into the binary, and loading of
//! custom lists from disk.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
