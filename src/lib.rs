//! Spelling Bee
//!
//! A seven-letter word puzzle: find words of four or more letters made from the
//! puzzle's letters, always including the center letter.
//!
//! # Quick Start
//!
//! ```rust
//! use spelling_bee::core::{Corpus, LetterSet};
//! use spelling_bee::game::Session;
//!
//! let corpus = Corpus::from_words(["dolphin", "hold", "lion"]);
//! let mut session = Session::new(&corpus, LetterSet::new("dolphin").unwrap());
//!
//! let result = session.submit("dolphin");
//! assert!(result.pangram);
//! assert_eq!(result.score_awarded, 14);
//! ```

// Core puzzle types and rules
pub mod core;

// Session and letter prompt state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
