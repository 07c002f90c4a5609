//! Display functions for command results

use super::formatters::{capitalize, create_progress_bar};
use crate::commands::{PuzzleStats, SolveResult, SurveyStatistics};
use colored::Colorize;

/// Print the solutions of a puzzle
pub fn print_solve_result(result: &SolveResult) {
    let letters = result.letters.to_string().to_uppercase();
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle: {} (center {})",
        letters.bright_yellow().bold(),
        result.letters.center().to_ascii_uppercase().to_string().bright_yellow()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words solve this puzzle.".red());
        return;
    }

    println!();
    for solved in &result.words {
        let label = format!("{:<16} {:>3}", capitalize(&solved.word), solved.score);
        if solved.pangram {
            println!("  {} {}", label.bright_green().bold(), "pangram".bright_black());
        } else {
            println!("  {label}");
        }
    }

    println!(
        "\n{} words, {} pangrams, {} points possible",
        result.words.len().to_string().bright_cyan().bold(),
        result.pangram_count().to_string().bright_green().bold(),
        result.possible_score.to_string().bright_yellow().bold()
    );
}

fn puzzle_line(puzzle: &PuzzleStats) -> String {
    format!(
        "{} (center {}): {} words, {} pangrams, {} points",
        puzzle.letters.to_string().to_uppercase(),
        puzzle.letters.center().to_ascii_uppercase(),
        puzzle.valid_words,
        puzzle.pangrams,
        puzzle.possible_score
    )
}

/// Print the result of a survey
pub fn print_survey_result(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PUZZLE SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Seed words:       {}", stats.seeds);
    println!("   Puzzles:          {}", stats.puzzles);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.puzzles == 0 {
        println!("\n{}", "No puzzles to survey.".red());
        return;
    }

    println!("\n📈 {}", "Words per puzzle:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.1}", stats.average_words).bright_yellow().bold()
    );
    println!(
        "   Fewest:           {}",
        stats.min_words.to_string().yellow()
    );
    println!(
        "   Most:             {}",
        stats.max_words.to_string().green()
    );
    println!("   Average points:   {:.1}", stats.average_score);

    let bar = create_progress_bar(stats.average_words, stats.max_words as f64, 40);
    println!("   Average vs most:  {}", bar.green());

    if let Some(richest) = &stats.richest {
        println!("\n🏆 Richest: {}", puzzle_line(richest).bright_green());
    }
    if let Some(poorest) = &stats.poorest {
        println!("   Poorest: {}", puzzle_line(poorest).bright_black());
    }
}
