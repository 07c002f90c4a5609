//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{Corpus, LetterSet};
use crate::game::{LetterEntry, Session};
use crate::output::formatters::{found_word_label, letters_line, score_summary};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What to do after a puzzle ends
enum Next {
    NewPuzzle,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// Starts with `letters` if given, otherwise asks for a puzzle first.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input, or if a random
/// puzzle is requested from a dictionary that cannot generate one.
pub fn run_simple<R: Rng + ?Sized>(
    corpus: &Corpus,
    letters: Option<LetterSet>,
    rng: &mut R,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Spelling Bee - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make words of 4 or more letters. Every word must use the center letter,");
    println!("letters may repeat, and a word using all seven letters is a pangram.\n");
    println!("Commands: ':shuffle' to shuffle, ':words' to list found words,");
    println!("          ':new' for a new puzzle, ':quit' to exit\n");

    let mut input = io::stdin().lock();
    let mut next_letters = letters;

    loop {
        let letters = match next_letters.take() {
            Some(letters) => letters,
            None => match prompt_letters(&mut input, corpus, rng)? {
                Some(letters) => letters,
                None => break,
            },
        };

        match play(&mut input, Session::new(corpus, letters), rng)? {
            Next::NewPuzzle => println!("\n🔄 New puzzle!\n"),
            Next::Quit => break,
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Ask for seven letters, or generate them
fn prompt_letters<R: Rng + ?Sized>(
    input: &mut impl BufRead,
    corpus: &Corpus,
    rng: &mut R,
) -> Result<Option<LetterSet>> {
    loop {
        let Some(line) = get_user_input(
            input,
            "Enter 7 letters, center first (blank for random, ':quit' to exit)",
        )?
        else {
            return Ok(None);
        };

        if matches!(line.as_str(), ":quit" | ":q") {
            return Ok(None);
        }

        let letters = if line.is_empty() {
            let mut entry = LetterEntry::new();
            entry.randomize(corpus, rng)?;
            entry.finish()
        } else {
            LetterSet::new(&line)
        };

        match letters {
            Ok(letters) => return Ok(Some(letters)),
            Err(e) => println!("❌ {e}\n"),
        }
    }
}

/// Play one puzzle until the player asks for another or quits
fn play<R: Rng + ?Sized>(
    input: &mut impl BufRead,
    mut session: Session,
    rng: &mut R,
) -> Result<Next> {
    println!(
        "{} words to find, {} points possible\n",
        session.valid_count(),
        session.possible_score()
    );

    loop {
        if session.is_complete() {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "        👑  Q U E E N   B E E !  👑".bright_yellow().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!("\n  {}\n", score_summary(&session));

            let again = get_user_input(input, "Play again? (yes/no)")?.unwrap_or_default();
            return Ok(match again.to_lowercase().as_str() {
                "yes" | "y" => Next::NewPuzzle,
                _ => Next::Quit,
            });
        }

        println!("────────────────────────────────────────────────────────────");
        println!(
            "{}    {}",
            letters_line(&session).bright_yellow().bold(),
            score_summary(&session)
        );

        let Some(line) = get_user_input(input, "Word")? else {
            return Ok(Next::Quit);
        };

        match line.to_lowercase().as_str() {
            "" => {}
            ":quit" | ":q" => return Ok(Next::Quit),
            ":new" | ":n" => return Ok(Next::NewPuzzle),
            ":shuffle" | ":s" => session.reshuffle(rng),
            ":words" | ":w" => print_found_words(&session),
            word => {
                let result = session.submit(word);
                match result.reason {
                    None if result.pangram => println!(
                        "{}",
                        format!("🐝 Pangram! +{}", result.score_awarded)
                            .bright_green()
                            .bold()
                    ),
                    None => println!("{}", format!("✓ Nice! +{}", result.score_awarded).green()),
                    Some(reason) => println!("{}", format!("✗ {reason}").red()),
                }
            }
        }
    }
}

fn print_found_words(session: &Session) {
    if session.found_count() == 0 {
        println!("No words found yet.");
        return;
    }

    println!("Found words:");
    for found in session.found_words() {
        let label = found_word_label(found);
        if found.pangram {
            println!("  • {}", label.bright_white().bold());
        } else {
            println!("  • {}", label.bright_black());
        }
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
