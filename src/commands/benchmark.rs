//! Benchmark command
//!
//! Plays the solver against many secrets and aggregates the results.

use crate::core::Word;
use crate::error::SolveError;
use crate::output::formatters::progress_bar;
use crate::puzzle::SimulatedPuzzle;
use crate::solver::{SessionConfig, SolveSession, SolveState, Solver, Strategy};
use indicatif::ProgressBar;
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub stuck: usize,
    /// Attempts summed over solved games only
    pub solved_attempts: usize,
    /// Solved games keyed by the attempt they were solved on
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
}

impl BenchmarkResult {
    /// Fraction of games solved, in `0.0..=1.0`
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.solved as f64 / self.total_words as f64
        }
    }

    /// Average attempts over solved games
    #[must_use]
    pub fn average_attempts(&self) -> f64 {
        if self.solved == 0 {
            0.0
        } else {
            self.solved_attempts as f64 / self.solved as f64
        }
    }

    #[must_use]
    pub fn words_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.total_words as f64 / secs
        } else {
            0.0
        }
    }
}

/// Run the solver against each target word in turn
///
/// With `show_progress` set, an indicatif bar tracks the run on stderr.
///
/// # Errors
///
/// Returns the first error a solve session raises; `Stuck` and `Exhausted`
/// games are counted, not treated as errors.
pub fn run_benchmark<S: Strategy, R: Rng + ?Sized>(
    solver: &Solver<S>,
    targets: &[Word],
    config: SessionConfig,
    rng: &mut R,
    show_progress: bool,
) -> Result<BenchmarkResult, SolveError> {
    let start = Instant::now();
    let pb = if show_progress {
        progress_bar(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        exhausted: 0,
        stuck: 0,
        solved_attempts: 0,
        distribution: BTreeMap::new(),
        duration: Duration::ZERO,
    };

    for (idx, target) in targets.iter().enumerate() {
        let puzzle = SimulatedPuzzle::new(target.clone());
        let outcome = SolveSession::new(solver, puzzle, config).run(rng)?;
        debug!("{target}: {:?} after {}", outcome.state, outcome.attempts());

        match outcome.state {
            SolveState::Solved => {
                result.solved += 1;
                result.solved_attempts += outcome.attempts();
                *result.distribution.entry(outcome.attempts()).or_insert(0) += 1;
            }
            SolveState::Stuck => result.stuck += 1,
            _ => result.exhausted += 1,
        }

        if idx % 10 == 0 && result.solved > 0 {
            pb.set_message(format!("Avg: {:.2}", result.average_attempts()));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    result.duration = start.elapsed();
    info!(
        "benchmark: {}/{} solved, average {:.2}",
        result.solved,
        result.total_words,
        result.average_attempts()
    );
    Ok(result)
}
