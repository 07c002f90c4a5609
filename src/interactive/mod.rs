//! Interactive TUI interface
//!
//! Letter prompt and game screens driven by crossterm key events.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Screen, run_tui};
