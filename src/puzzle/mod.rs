//! External puzzle collaborators
//!
//! The solve loop only talks to a puzzle through these traits. Anything that
//! can register a guess, show the graded board and say when the game is over
//! can be driven: a browser page, a terminal user, or the offline simulator.

mod simulated;
mod terminal;

pub use simulated::SimulatedPuzzle;
pub use terminal::TerminalPuzzle;

use crate::core::{GuessRecord, Word};
use crate::error::SolveError;
use anyhow::Result;

/// Maximum number of guesses the daily puzzle allows
pub const MAX_ATTEMPTS: usize = 6;

/// One row of the rendered board, exactly as the puzzle shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    pub letters: String,
    pub evaluations: Vec<String>,
}

impl BoardRow {
    #[must_use]
    pub fn new(letters: impl Into<String>, evaluations: Vec<String>) -> Self {
        Self {
            letters: letters.into(),
            evaluations,
        }
    }

    /// Validate the row into a guess record
    ///
    /// # Errors
    /// Fails if the letters are not a word, an evaluation is unrecognised,
    /// or the evaluation count does not match the word.
    pub fn to_record(&self) -> Result<GuessRecord, SolveError> {
        GuessRecord::from_rendered(&self.letters, &self.evaluations)
    }
}

impl From<&GuessRecord> for BoardRow {
    fn from(record: &GuessRecord) -> Self {
        Self {
            letters: record.word().text().to_string(),
            evaluations: record.grades().iter().map(|g| g.name().to_string()).collect(),
        }
    }
}

/// Registers a guess with the puzzle
pub trait GuessSubmitter {
    /// Enter `word` as the next guess; returns once the puzzle accepted it
    fn submit_guess(&mut self, word: &Word) -> Result<()>;
}

/// Reads the graded board back from the puzzle
pub trait FeedbackReader {
    /// Every rendered row so far, in submission order
    fn read_board(&mut self) -> Result<Vec<BoardRow>>;
}

/// Reports that the puzzle has reached a terminal state
pub trait CompletionSignal {
    /// Whether the game is over (won, or out of attempts)
    fn is_finished(&mut self) -> Result<bool>;
}

/// A complete puzzle collaborator
pub trait Puzzle: GuessSubmitter + FeedbackReader + CompletionSignal {}

impl<T: GuessSubmitter + FeedbackReader + CompletionSignal> Puzzle for T {}
