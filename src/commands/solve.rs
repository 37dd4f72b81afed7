//! Word solving command
//!
//! Plays one game against a simulated puzzle with a known secret.

use crate::core::Word;
use crate::error::SolveError;
use crate::puzzle::{MAX_ATTEMPTS, SimulatedPuzzle};
use crate::solver::{SessionConfig, SolveOutcome, SolveSession, Solver, Strategy};
use log::warn;
use rand::Rng;

/// Configuration for solving a word
#[derive(Debug, Clone)]
pub struct SolveConfig {
    pub target: String,
    pub max_attempts: usize,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            max_attempts: MAX_ATTEMPTS,
            session: SessionConfig::default(),
        }
    }
}

/// Solve a specific word using the given solver
///
/// A secret missing from the lexicon is still played; the session ends
/// `Stuck` once feedback rules out every lexicon word.
///
/// # Errors
///
/// Returns `SolveError::InvalidWord` if the target is not a five-letter word,
/// or any error raised by the solve session.
pub fn solve_word<S: Strategy, R: Rng + ?Sized>(
    config: &SolveConfig,
    solver: &Solver<S>,
    rng: &mut R,
) -> Result<SolveOutcome, SolveError> {
    let secret = Word::new(config.target.as_str())?;
    if !solver.lexicon().contains(&secret) {
        warn!("{secret} is not in the word list");
    }

    let puzzle = SimulatedPuzzle::new(secret).with_max_attempts(config.max_attempts);
    SolveSession::new(solver, puzzle, config.session).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;
    use crate::solver::{FrequencyStrategy, SolveState};
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lexicon() -> Lexicon {
        Lexicon::new(words_from_slice(WORDS))
    }

    #[test]
    fn solve_word_succeeds() {
        let lexicon = lexicon();
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&SolveConfig::new("crane"), &solver, &mut rng).unwrap();

        assert!(outcome.state.is_terminal());
        assert!(outcome.attempts() <= MAX_ATTEMPTS);
        if outcome.solved() {
            assert_eq!(outcome.solution().map(Word::text), Some("crane"));
        }
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let lexicon = lexicon();
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&SolveConfig::new("slate"), &solver, &mut rng).unwrap();

        assert!(!outcome.history.is_empty());
        for pair in outcome.remaining.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        // Every guess is distinct
        for (i, record) in outcome.history.iter().enumerate() {
            for later in outcome.history.iter().skip(i + 1) {
                assert_ne!(record.word(), later.word());
            }
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let lexicon = lexicon();
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let result = solve_word(&SolveConfig::new("toolong"), &solver, &mut rng);
        assert!(matches!(result, Err(SolveError::InvalidWord(_))));
    }

    #[test]
    fn solve_with_attempt_limit() {
        let lexicon = lexicon();
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let mut config = SolveConfig::new("fjord");
        config.max_attempts = 1;
        let outcome = solve_word(&config, &solver, &mut rng).unwrap();

        assert_eq!(outcome.attempts(), 1);
        if !outcome.solved() {
            assert_eq!(outcome.state, SolveState::Exhausted);
        }
    }

    #[test]
    fn secret_outside_lexicon_gets_stuck() {
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate", "irate"]));
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = solve_word(&SolveConfig::new("mummy"), &solver, &mut rng).unwrap();
        assert_eq!(outcome.state, SolveState::Stuck);
        assert_eq!(outcome.remaining.last(), Some(&0));
    }
}
