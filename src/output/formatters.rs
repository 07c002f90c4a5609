//! Formatting utilities for terminal output

use crate::game::{FoundWord, Session};

/// Format a found word for listing, e.g. "Dolphin (14)"
#[must_use]
pub fn found_word_label(found: &FoundWord) -> String {
    format!("{} ({})", capitalize(&found.word), found.score)
}

/// Uppercase the first letter of a word
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Word count and score line, e.g. "3 words; 16 points"
#[must_use]
pub fn score_summary(session: &Session) -> String {
    let words = session.found_count();
    let points = session.score();
    format!(
        "{words} {}; {points} {}",
        if words == 1 { "word" } else { "words" },
        if points == 1 { "point" } else { "points" }
    )
}

/// Letters spaced out for display, center letter bracketed, e.g. "[D] O L P H I N"
#[must_use]
pub fn letters_line(session: &Session) -> String {
    let letters = session.letters();
    let outer: Vec<String> = letters
        .outer()
        .iter()
        .map(|&b| char::from(b).to_ascii_uppercase().to_string())
        .collect();
    format!(
        "[{}] {}",
        letters.center().to_ascii_uppercase(),
        outer.join(" ")
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Corpus, LetterSet};

    #[test]
    fn found_word_label_capitalizes() {
        let found = FoundWord {
            word: "dolphin".to_string(),
            score: 14,
            pangram: true,
        };
        assert_eq!(found_word_label(&found), "Dolphin (14)");
    }

    #[test]
    fn capitalize_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("hold"), "Hold");
    }

    #[test]
    fn score_summary_pluralizes() {
        let corpus = Corpus::from_words(["dolphin", "hold", "pond"]);
        let mut session = Session::new(&corpus, LetterSet::new("dolphin").unwrap());
        assert_eq!(score_summary(&session), "0 words; 0 points");

        session.submit("hold");
        assert_eq!(score_summary(&session), "1 word; 1 point");

        session.submit("dolphin");
        assert_eq!(score_summary(&session), "2 words; 15 points");
    }

    #[test]
    fn letters_line_brackets_center() {
        let corpus = Corpus::default();
        let session = Session::new(&corpus, LetterSet::new("dolphin").unwrap());
        assert_eq!(letters_line(&session), "[D] O L P H I N");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(0.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }
}
