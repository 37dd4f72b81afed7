//! Error types for the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Errors raised while building history or driving a solve
#[derive(Debug, Error)]
pub enum SolveError {
    /// No lexicon word is consistent with the feedback so far
    #[error("no candidate words remain; feedback is contradictory or the word list is incomplete")]
    EmptyCandidateSet,

    /// The lexicon has no words to guess from
    #[error("the word list is empty")]
    EmptyLexicon,

    /// A feedback row whose grade count does not match its word
    #[error("guess record for \"{word}\" has {grades} grades")]
    InvalidGuessRecord { word: String, grades: usize },

    /// A rendered evaluation that is not one of the three grades
    #[error("unrecognised grade \"{0}\"")]
    UnknownGrade(String),

    /// A rendered row whose letters do not form a valid word
    #[error("invalid word on the board: {0}")]
    InvalidWord(#[from] WordError),

    /// The board never showed the submitted guess
    #[error("feedback for the submitted guess did not appear after {polls} polls")]
    FeedbackTimeout { polls: usize },

    /// The external puzzle collaborator failed
    #[error(transparent)]
    Puzzle(#[from] anyhow::Error),
}
