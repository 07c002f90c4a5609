//! Spelling Bee - CLI
//!
//! Seven-letter word puzzle with TUI and CLI modes, plus puzzle analysis commands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use spelling_bee::{
    commands::{run_simple, run_survey, solve_letters},
    core::{Corpus, LetterSet},
    output::{print_solve_result, print_survey_result},
    wordlists::{WORDS, loader::load_from_file},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Seven-letter word puzzle: make words around the center letter",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded dictionary) or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Seed for puzzle generation and shuffling (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Puzzle letters, center first (skips the letter prompt)
    #[arg(short, long, global = true)]
    letters: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List every word that solves a puzzle
    Solve {
        /// Puzzle letters, center first
        #[arg(value_name = "LETTERS")]
        puzzle: String,
    },

    /// Measure every puzzle the dictionary can generate
    Survey {
        /// Limit number of seed words surveyed
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "all": Use the embedded dictionary
/// - "<path>": Load a custom one-word-per-line file
fn load_corpus(wordlist_mode: &str) -> Result<Corpus> {
    let corpus = match wordlist_mode {
        "all" => Corpus::from_words(WORDS),
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to read word list '{path}'"))?;
            Corpus::from_words(&words)
        }
    };

    tracing::debug!(
        source = wordlist_mode,
        words = corpus.len(),
        "dictionary loaded"
    );
    Ok(corpus)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let corpus = load_corpus(&cli.wordlist)?;

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let letters = cli
        .letters
        .as_deref()
        .map(LetterSet::new)
        .transpose()
        .context("Invalid --letters")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, letters, rng),
        Commands::Simple => run_simple_command(&corpus, letters, rng),
        Commands::Solve { puzzle } => run_solve_command(&puzzle, &corpus),
        Commands::Survey { limit } => {
            run_survey_command(&corpus, limit);
            Ok(())
        }
    }
}

fn run_play_command(corpus: &Corpus, letters: Option<LetterSet>, rng: StdRng) -> Result<()> {
    use spelling_bee::interactive::{App, run_tui};

    tracing::info!("starting interactive mode");
    let app = App::new(corpus, letters, rng);
    run_tui(app)
}

fn run_simple_command(corpus: &Corpus, letters: Option<LetterSet>, mut rng: StdRng) -> Result<()> {
    tracing::info!("starting simple mode");
    run_simple(corpus, letters, &mut rng)
}

fn run_solve_command(letters: &str, corpus: &Corpus) -> Result<()> {
    tracing::info!(letters, "solving puzzle");
    let result = solve_letters(letters, corpus).context("Invalid puzzle letters")?;
    print_solve_result(&result);
    Ok(())
}

fn run_survey_command(corpus: &Corpus, limit: Option<usize>) {
    println!("\n{}", "═".repeat(60));
    println!(" Surveying puzzles from {} seed words ", corpus.pangram_seed().len());
    println!("{}", "═".repeat(60));

    let stats = run_survey(corpus, limit, true);
    print_survey_result(&stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_letters_do_not_fill_global_flag() {
        let cli = Cli::try_parse_from(["spelling_bee", "solve", "abc"]).unwrap();
        assert!(cli.letters.is_none());
        assert!(matches!(cli.command, Some(Commands::Solve { puzzle }) if puzzle == "abc"));
    }

    #[test]
    fn global_letters_flag_with_solve() {
        let cli =
            Cli::try_parse_from(["spelling_bee", "solve", "dolphin", "-l", "pdolhin"]).unwrap();
        assert_eq!(cli.letters.as_deref(), Some("pdolhin"));
        assert!(matches!(cli.command, Some(Commands::Solve { puzzle }) if puzzle == "dolphin"));
    }

    #[test]
    fn letters_flag_for_default_mode() {
        let cli = Cli::try_parse_from(["spelling_bee", "--letters", "dolphin"]).unwrap();
        assert_eq!(cli.letters.as_deref(), Some("dolphin"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn clap_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
