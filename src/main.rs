//! WordleBot - CLI
//!
//! Solves Wordle puzzles by constraint filtering and letter-frequency
//! guessing, either against a known secret or alongside a person playing.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::io;
use std::time::Duration;
use wordlebot::{
    commands::{SolveConfig, run_assist, run_benchmark, solve_word},
    lexicon::Lexicon,
    output::{print_benchmark_result, print_outcome},
    solver::{FrequencyStrategy, SessionConfig, Solver},
    wordlists::loader::{EMBEDDED, load_lexicon},
};

#[derive(Parser)]
#[command(
    name = "wordlebot",
    about = "Wordle solver using letter constraints and frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Open with a random word instead of the best-scored one
    #[arg(long, global = true)]
    random_first: bool,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = EMBEDDED)]
    wordlist: String,

    /// Milliseconds to wait after a guess before reading the board
    #[arg(long, global = true, default_value = "0")]
    settle_ms: u64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a specific secret word offline
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts after each round
        #[arg(short = 'c', long = "counts")]
        show_counts: bool,
    },

    /// Play against the first N words of the list and report statistics
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Suggest guesses for a puzzle played elsewhere, reading feedback from stdin
    Assist,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let lexicon = load_lexicon(&cli.wordlist)
        .with_context(|| format!("failed to load word list '{}'", cli.wordlist))?;
    anyhow::ensure!(!lexicon.is_empty(), "word list '{}' has no valid words", cli.wordlist);

    let session = SessionConfig {
        randomize_first_guess: cli.random_first,
        settle_delay: Duration::from_millis(cli.settle_ms),
        ..SessionConfig::default()
    };

    match cli.command {
        Commands::Solve { word, show_counts } => {
            run_solve_command(&lexicon, &word, show_counts, session)
        }
        Commands::Benchmark { count } => run_benchmark_command(&lexicon, count, session),
        Commands::Assist => run_assist_command(&lexicon, session),
    }
}

fn run_solve_command(
    lexicon: &Lexicon,
    word: &str,
    show_counts: bool,
    session: SessionConfig,
) -> Result<()> {
    let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), lexicon);
    let mut config = SolveConfig::new(word);
    config.session = session;

    let outcome = solve_word(&config, &solver, &mut rand::rng())?;
    print_outcome(&outcome, Some(word), show_counts);
    Ok(())
}

fn run_benchmark_command(lexicon: &Lexicon, count: usize, session: SessionConfig) -> Result<()> {
    let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), lexicon);
    let targets = &lexicon.words()[..count.min(lexicon.len())];

    println!("🎯 Testing {} words...", targets.len());
    let result = run_benchmark(&solver, targets, session, &mut rand::rng(), true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_assist_command(lexicon: &Lexicon, session: SessionConfig) -> Result<()> {
    let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), lexicon);

    println!("WordleBot assist: enter the colours the puzzle shows after each guess.");
    println!("G = green, Y = yellow, - = gray (emoji squares work too).");

    let stdin = io::stdin();
    let outcome = run_assist(
        &solver,
        stdin.lock(),
        io::stdout(),
        session.randomize_first_guess,
        &mut rand::rng(),
    )?;
    print_outcome(&outcome, None, true);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn solve_counts_flag_and_global_verbosity_coexist() {
        let cli = Cli::try_parse_from(["wordlebot", "solve", "crane", "-c", "-vv"]).unwrap();
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Solve { word, show_counts } => {
                assert_eq!(word, "crane");
                assert!(show_counts);
            }
            _ => panic!("expected solve"),
        }
    }

    #[test]
    fn global_flags_default() {
        let cli = Cli::try_parse_from(["wordlebot", "benchmark", "-n", "3"]).unwrap();
        assert!(!cli.random_first);
        assert_eq!(cli.wordlist, EMBEDDED);
        assert_eq!(cli.settle_ms, 0);
        assert!(matches!(cli.command, Commands::Benchmark { count: 3 }));
    }
}
