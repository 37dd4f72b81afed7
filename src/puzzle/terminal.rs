//! Interactive puzzle driven by a person at a terminal
//!
//! The bot prints each guess; the user types it into the real puzzle and
//! reports the colours back.

use super::{BoardRow, CompletionSignal, FeedbackReader, GuessSubmitter, MAX_ATTEMPTS};
use crate::core::{Grade, GuessRecord, WORD_LENGTH, Word};
use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};

/// Puzzle collaborator over a line-based reader and a writer
pub struct TerminalPuzzle<R: BufRead, W: Write> {
    reader: R,
    writer: W,
    pending: Option<Word>,
    board: Vec<GuessRecord>,
    max_attempts: usize,
}

impl<R: BufRead, W: Write> TerminalPuzzle<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: None,
            board: Vec::new(),
            max_attempts: MAX_ATTEMPTS,
        }
    }

    /// Consume the puzzle and return the writer
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.writer, "{text}: ")?;
        self.writer.flush()?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .context("failed to read feedback")?;
        if read == 0 {
            bail!("input closed before feedback was entered");
        }
        Ok(input.trim().to_string())
    }

    /// Ask for feedback until a usable line is entered
    fn read_grades(&mut self) -> Result<Vec<Grade>> {
        loop {
            let input = self.prompt("Feedback (G/Y/-, 'win' or 'quit')")?;
            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => bail!("solve abandoned by user"),
                "win" | "solved" => return Ok(vec![Grade::Correct; WORD_LENGTH]),
                _ => {}
            }

            match Grade::parse_line(&input) {
                Some(grades) if grades.len() == WORD_LENGTH => return Ok(grades),
                _ => writeln!(
                    self.writer,
                    "Invalid feedback. Enter {WORD_LENGTH} of G (green), Y (yellow) or - (gray)."
                )?,
            }
        }
    }

    fn solved(&self) -> bool {
        self.board.last().is_some_and(GuessRecord::is_solved)
    }
}

impl<R: BufRead, W: Write> GuessSubmitter for TerminalPuzzle<R, W> {
    fn submit_guess(&mut self, word: &Word) -> Result<()> {
        writeln!(
            self.writer,
            "\nGuess {}: {}",
            self.board.len() + 1,
            word.text().to_uppercase()
        )?;
        self.pending = Some(word.clone());
        Ok(())
    }
}

impl<R: BufRead, W: Write> FeedbackReader for TerminalPuzzle<R, W> {
    fn read_board(&mut self) -> Result<Vec<BoardRow>> {
        if let Some(word) = self.pending.take() {
            let grades = self.read_grades()?;
            self.board.push(GuessRecord::new(word, grades)?);
        }
        Ok(self.board.iter().map(BoardRow::from).collect())
    }
}

impl<R: BufRead, W: Write> CompletionSignal for TerminalPuzzle<R, W> {
    fn is_finished(&mut self) -> Result<bool> {
        Ok(self.solved() || self.board.len() >= self.max_attempts)
    }
}
