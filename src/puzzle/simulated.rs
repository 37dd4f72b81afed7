//! Offline puzzle with a known secret

use super::{BoardRow, CompletionSignal, FeedbackReader, GuessSubmitter, MAX_ATTEMPTS};
use crate::core::{Grade, GuessRecord, Word};
use anyhow::{Result, bail};

/// A puzzle that grades guesses against a secret it holds
///
/// Renders rows the way the daily puzzle does and finishes when the secret is
/// guessed or `max_attempts` rows are on the board.
#[derive(Debug, Clone)]
pub struct SimulatedPuzzle {
    secret: Word,
    max_attempts: usize,
    board: Vec<GuessRecord>,
}

impl SimulatedPuzzle {
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            max_attempts: MAX_ATTEMPTS,
            board: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    fn solved(&self) -> bool {
        self.board.last().is_some_and(GuessRecord::is_solved)
    }
}

impl GuessSubmitter for SimulatedPuzzle {
    fn submit_guess(&mut self, word: &Word) -> Result<()> {
        if self.solved() || self.board.len() >= self.max_attempts {
            bail!("puzzle is already finished; cannot guess {word}");
        }
        let grades = Grade::score(word, &self.secret).to_vec();
        self.board.push(GuessRecord::new(word.clone(), grades)?);
        Ok(())
    }
}

impl FeedbackReader for SimulatedPuzzle {
    fn read_board(&mut self) -> Result<Vec<BoardRow>> {
        Ok(self.board.iter().map(BoardRow::from).collect())
    }
}

impl CompletionSignal for SimulatedPuzzle {
    fn is_finished(&mut self) -> Result<bool> {
        Ok(self.solved() || self.board.len() >= self.max_attempts)
    }
}
