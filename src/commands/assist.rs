//! Assist command
//!
//! Suggests guesses for a puzzle played elsewhere; the user reports the
//! colours after each one.

use crate::error::SolveError;
use crate::puzzle::TerminalPuzzle;
use crate::solver::{SessionConfig, SolveOutcome, SolveSession, Solver, Strategy};
use rand::Rng;
use std::io::{BufRead, Write};

/// Run an interactive solve over `reader` and `writer`
///
/// The board is read as soon as the user answers, so the settle delay is
/// dropped and a single poll suffices.
///
/// # Errors
///
/// Returns `SolveError::Puzzle` if the user quits or input ends, or any other
/// error raised by the solve session.
pub fn run_assist<S, R, W, G>(
    solver: &Solver<S>,
    reader: R,
    writer: W,
    randomize_first_guess: bool,
    rng: &mut G,
) -> Result<SolveOutcome, SolveError>
where
    S: Strategy,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let config = SessionConfig {
        randomize_first_guess,
        feedback_polls: 1,
        ..SessionConfig::default()
    };
    let puzzle = TerminalPuzzle::new(reader, writer);
    SolveSession::new(solver, puzzle, config).run(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Grade, Word};
    use crate::lexicon::Lexicon;
    use crate::solver::{FrequencyStrategy, SolveState};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn win_on_first_guess() {
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate", "irate"]));
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let outcome = run_assist(&solver, Cursor::new("GGGGG\n"), Vec::new(), false, &mut rng)
            .unwrap();
        assert_eq!(outcome.state, SolveState::Solved);
        assert_eq!(outcome.attempts(), 1);
    }

    #[test]
    fn follows_reported_feedback() {
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate", "chump"]));
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);
        let first = solver.first_guess(false, &mut rng).unwrap().clone();

        // Grade the opener against CHUMP, then confirm the win
        let secret = Word::new("chump").unwrap();
        let first_row: String = Grade::score(&first, &secret)
            .iter()
            .map(|grade| match grade {
                Grade::Correct => 'G',
                Grade::Present => 'Y',
                Grade::Absent => '-',
            })
            .collect();
        let input = format!("{first_row}\nwin\n");

        let outcome = run_assist(&solver, Cursor::new(input), Vec::new(), false, &mut rng).unwrap();
        assert!(outcome.solved());
        assert_eq!(outcome.solution().map(Word::text), Some("chump"));
    }

    #[test]
    fn quitting_is_an_error() {
        let lexicon = Lexicon::new(words_from_slice(&["crane", "slate"]));
        let solver = Solver::new(FrequencyStrategy::new(*lexicon.frequency()), &lexicon);
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_assist(&solver, Cursor::new("quit\n"), Vec::new(), false, &mut rng);
        assert!(matches!(result, Err(SolveError::Puzzle(_))));
    }
}
