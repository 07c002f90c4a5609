//! Game state
//!
//! The letter prompt that starts a puzzle and the session that plays it.

mod entry;
mod session;

pub use entry::{EntryMessage, LetterEntry};
pub use session::{FoundWord, Session, SubmitResult};
