//! Display functions for command results

use super::formatters::{colored_record, create_progress_bar};
use crate::commands::BenchmarkResult;
use crate::puzzle::MAX_ATTEMPTS;
use crate::solver::{SolveOutcome, SolveState};
use colored::Colorize;

/// Print the rounds and final state of a solve
///
/// With `verbose`, each unsolved round also shows how many candidates it
/// left.
pub fn print_outcome(outcome: &SolveOutcome, title: Option<&str>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(title) = title {
        println!("Solving: {}", title.to_uppercase().bright_yellow().bold());
        println!("{}", "─".repeat(60).cyan());
    }

    for (i, record) in outcome.history.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_record(record));
        if verbose && let Some(&remaining) = outcome.remaining.get(i) {
            println!("  Candidates left: {remaining}");
        }
    }

    println!();
    match outcome.state {
        SolveState::Solved => println!(
            "{}",
            format!("✅ Solved in {} guesses!", outcome.attempts())
                .green()
                .bold()
        ),
        SolveState::Stuck => println!(
            "{}",
            "❌ No word in the list fits the feedback".red().bold()
        ),
        _ => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", outcome.attempts())
                .red()
                .bold()
        ),
    }

    println!("\n{}", outcome.share_text(MAX_ATTEMPTS));
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!("   Out of guesses:   {}", result.exhausted.to_string().yellow());
    println!("   Stuck:            {}", result.stuck.to_string().red());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second());

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&attempts, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
