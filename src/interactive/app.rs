//! TUI application state and logic

use crate::core::{Corpus, LetterSet};
use crate::game::{LetterEntry, Session, SubmitResult};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub corpus: &'a Corpus,
    pub rng: StdRng,
    pub screen: Screen<'a>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// What the player is doing
pub enum Screen<'a> {
    /// Choosing the letters of a new puzzle
    LetterEntry(LetterEntry),
    /// Playing a puzzle
    Playing(Session<'a>),
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Pangram,
    Error,
}

impl<'a> App<'a> {
    /// Create the app, starting on the letter prompt unless `letters` is given
    #[must_use]
    pub fn new(corpus: &'a Corpus, letters: Option<LetterSet>, rng: StdRng) -> Self {
        let mut app = Self {
            corpus,
            rng,
            screen: Screen::LetterEntry(LetterEntry::new()),
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };

        match letters {
            Some(letters) => app.start_session(letters),
            None => app.add_message(
                "Type 7 letters (center first) or press TAB for a random puzzle.",
                MessageStyle::Info,
            ),
        }

        app
    }

    /// Start playing a letter set
    pub fn start_session(&mut self, letters: LetterSet) {
        let session = Session::new(self.corpus, letters);
        let summary = format!(
            "{} words to find, {} points possible.",
            session.valid_count(),
            session.possible_score()
        );

        self.screen = Screen::Playing(session);
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(&summary, MessageStyle::Info);
    }

    /// Go back to the letter prompt
    pub fn new_puzzle(&mut self) {
        self.screen = Screen::LetterEntry(LetterEntry::new());
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message(
            "New puzzle! Type 7 letters or press TAB for a random one.",
            MessageStyle::Info,
        );
    }

    /// Generate random letters on the letter prompt
    pub fn randomize_letters(&mut self) {
        if let Screen::LetterEntry(entry) = &mut self.screen
            && let Err(e) = entry.randomize(self.corpus, &mut self.rng)
        {
            self.add_message(&e.to_string(), MessageStyle::Error);
        }
    }

    /// Confirm the letters on the letter prompt
    pub fn confirm_letters(&mut self) {
        if let Screen::LetterEntry(entry) = &mut self.screen
            && let Ok(letters) = entry.finish()
        {
            self.start_session(letters);
        }
    }

    /// Submit the typed word
    pub fn submit_word(&mut self) {
        let Screen::Playing(session) = &mut self.screen else {
            return;
        };

        let word = std::mem::take(&mut self.input_buffer);
        if word.is_empty() {
            return;
        }

        let was_complete = session.is_complete();
        let result = session.submit(&word);
        let complete = session.is_complete();

        self.report_submission(&word, result);

        if complete && !was_complete {
            self.add_message("👑 Queen Bee! Every word found.", MessageStyle::Pangram);
            self.add_message("Press Ctrl-N for a new puzzle or ESC to quit.", MessageStyle::Info);
        }
    }

    fn report_submission(&mut self, word: &str, result: SubmitResult) {
        let word = word.to_uppercase();
        match result.reason {
            None if result.pangram => self.add_message(
                &format!("🐝 Pangram! {word} +{}", result.score_awarded),
                MessageStyle::Pangram,
            ),
            None => self.add_message(
                &format!("Nice! {word} +{}", result.score_awarded),
                MessageStyle::Success,
            ),
            Some(reason) => self.add_message(&format!("{word}: {reason}"), MessageStyle::Error),
        }
    }

    /// Shuffle the outer letters
    pub fn shuffle(&mut self) {
        if let Screen::Playing(session) = &mut self.screen {
            session.reshuffle(&mut self.rng);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if let Screen::LetterEntry(entry) = &mut self.screen {
            match key.code {
                KeyCode::Char(c) if !ctrl => entry.push(c),
                KeyCode::Backspace => entry.backspace(),
                KeyCode::Tab => self.randomize_letters(),
                KeyCode::Enter => self.confirm_letters(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('n') if ctrl => self.new_puzzle(),
            KeyCode::Char(c) if !ctrl && c.is_alphabetic() => {
                self.input_buffer.push(c.to_ascii_lowercase());
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Tab => self.shuffle(),
            KeyCode::Enter => self.submit_word(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// The terminal is restored whether or not the game loop succeeds.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;

    let res = run_in_alternate_screen(app);
    let restored = restore_terminal();

    finish(res, restored)
}

fn run_in_alternate_screen(app: App) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_app(&mut terminal, app)
}

fn restore_terminal() -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(io::stdout(), LeaveAlternateScreen, Show);
    raw.and(screen)
}

/// Prefer the game loop's error over a cleanup error
fn finish(res: Result<()>, restored: io::Result<()>) -> Result<()> {
    match (res, restored) {
        (Err(e), Err(cleanup)) => {
            tracing::warn!(error = %cleanup, "failed to restore terminal");
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), restored) => Ok(restored?),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
