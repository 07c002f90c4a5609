//! TUI rendering with ratatui
//!
//! Letter prompt and game screens for the puzzle.

use super::app::{App, MessageStyle, Screen};
use crate::game::{LetterEntry, Session};
use crate::output::formatters::{found_word_label, score_summary};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    match &app.screen {
        Screen::LetterEntry(entry) => render_letter_entry(f, entry, chunks[1]),
        Screen::Playing(session) => render_game(f, app, session, chunks[1]),
    }

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🐝 SPELLING BEE")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(header, area);
}

fn render_letter_entry(f: &mut Frame, entry: &LetterEntry, area: Rect) {
    let mut typed: Vec<Span> = entry
        .letters()
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let style = if i == 0 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Span::styled(format!(" {} ", c.to_ascii_uppercase()), style)
        })
        .collect();
    for _ in entry.letters().len()..crate::core::LETTER_COUNT {
        typed.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Enter 7 letters or randomly generate them",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "The first letter is the center letter",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(typed),
        Line::from(""),
        Line::from(Span::styled(
            entry.message().map_or("", |m| m.text()),
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" New Puzzle ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_game(f: &mut Frame, app: &App, session: &Session, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Letters and input
            Constraint::Percentage(50), // Found words
        ])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Typed word
            Constraint::Min(7),    // Letter grid
        ])
        .split(columns[0]);

    render_input(f, app, left[0]);
    render_letter_grid(f, session, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(5),    // Found words
        ])
        .split(columns[1]);

    render_progress(f, session, right[0]);
    render_found_words(f, session, right[1]);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input_buffer.to_uppercase())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn letter_cell(letter: u8, center: bool) -> Span<'static> {
    let style = if center {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .add_modifier(Modifier::BOLD)
    };
    Span::styled(format!(" {} ", char::from(letter).to_ascii_uppercase()), style)
}

/// Draw the letters as a honeycomb: center in the middle, six around it
fn render_letter_grid(f: &mut Frame, session: &Session, area: Rect) {
    let letters = session.letters().letters();
    let cell = |i: usize| letter_cell(letters[i], i == 0);
    let gap = || Span::raw("   ");

    let content = vec![
        Line::from(""),
        Line::from(vec![cell(1), gap(), cell(2)]),
        Line::from(""),
        Line::from(vec![cell(6), gap(), cell(0), gap(), cell(3)]),
        Line::from(""),
        Line::from(vec![cell(5), gap(), cell(4)]),
    ];

    let grid = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(grid, area);
}

fn render_progress(f: &mut Frame, session: &Session, area: Rect) {
    let possible = session.possible_score().max(1);
    let percent = (u64::from(session.score()) * 100 / u64::from(possible)).min(100) as u16;

    let label = if session.is_complete() {
        format!("👑 Queen Bee! {}", score_summary(session))
    } else {
        format!(
            "{} | {}/{} points",
            score_summary(session),
            session.score(),
            session.possible_score()
        )
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Yellow))
        .percent(percent)
        .label(label);
    f.render_widget(gauge, area);
}

fn render_found_words(f: &mut Frame, session: &Session, area: Rect) {
    let items: Vec<ListItem> = session
        .found_words()
        .map(|found| {
            let style = if found.pangram {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(found_word_label(found)).style(style)
        })
        .collect();

    let title = format!(
        " Found {}/{} ",
        session.found_count(),
        session.valid_count()
    );
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Pangram => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::LetterEntry(_) => "Type letters | TAB: Random | Enter: Start | ESC: Quit",
        Screen::Playing(_) => "Enter: Submit | TAB: Shuffle | Ctrl-N: New Puzzle | ESC: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    f.render_widget(help, area);
}
