//! The solve loop
//!
//! A [`SolveSession`] drives one game against a [`Puzzle`] as an explicit
//! state machine:
//!
//! ```text
//! AwaitingFirstGuess -> AwaitingFeedback -> Solved | Exhausted | Stuck
//!                            ^      |
//!                            +------+  (next guess submitted)
//! ```

use super::engine::Solver;
use super::selector::Strategy;
use crate::core::{GuessRecord, History, Word, grades_to_emoji};
use crate::error::SolveError;
use crate::puzzle::Puzzle;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Where a solve session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveState {
    /// Nothing submitted yet
    AwaitingFirstGuess,
    /// A guess is on the board and its grades are awaited
    AwaitingFeedback,
    /// The last guess was graded all correct
    Solved,
    /// The puzzle finished without a solve
    Exhausted,
    /// No lexicon word fits the feedback
    Stuck,
}

impl SolveState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Stuck)
    }
}

/// Caller-level options for a solve session
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    /// Open with a random lexicon word instead of the top-scored one
    pub randomize_first_guess: bool,
    /// Wait between submitting a guess and reading the board
    pub settle_delay: Duration,
    /// Board reads to attempt before giving up on a guess's feedback
    pub feedback_polls: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            randomize_first_guess: false,
            settle_delay: Duration::ZERO,
            feedback_polls: 10,
        }
    }
}

/// Final result of a solve session
#[derive(Debug, Clone)]
pub struct SolveOutcome {
    pub state: SolveState,
    pub history: History,
    /// Candidates left after each graded round that did not solve the puzzle
    pub remaining: Vec<usize>,
}

impl SolveOutcome {
    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.state, SolveState::Solved)
    }

    /// Number of guesses submitted and graded
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// The winning word, if solved
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.history
            .last()
            .filter(|record| record.is_solved())
            .map(GuessRecord::word)
    }

    /// Shareable summary: a score line and one emoji row per guess
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Grade, GuessRecord, History, Word};
    /// use wordlebot::solver::{SolveOutcome, SolveState};
    ///
    /// let mut history = History::new();
    /// history.push(GuessRecord::new(Word::new("crane").unwrap(), Grade::parse_line("--G-G").unwrap()).unwrap());
    /// history.push(GuessRecord::new(Word::new("slate").unwrap(), Grade::parse_line("GGGGG").unwrap()).unwrap());
    /// let outcome = SolveOutcome { state: SolveState::Solved, history, remaining: vec![3] };
    ///
    /// assert_eq!(outcome.share_text(6), "WordleBot 2/6\n⬛⬛🟩⬛🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self, max_attempts: usize) -> String {
        let mut text = format!("WordleBot {}/{max_attempts}", self.attempts());
        for record in &self.history {
            text.push('\n');
            text.push_str(&grades_to_emoji(record.grades()));
        }
        text
    }
}

/// One game in progress against a puzzle
pub struct SolveSession<'s, 'a, S: Strategy, P: Puzzle> {
    solver: &'s Solver<'a, S>,
    puzzle: P,
    config: SessionConfig,
    state: SolveState,
    history: History,
    current: Option<&'a Word>,
    remaining: Vec<usize>,
}

impl<'s, 'a, S: Strategy, P: Puzzle> SolveSession<'s, 'a, S, P> {
    pub fn new(solver: &'s Solver<'a, S>, puzzle: P, config: SessionConfig) -> Self {
        Self {
            solver,
            puzzle,
            config,
            state: SolveState::AwaitingFirstGuess,
            history: History::new(),
            current: None,
            remaining: Vec::new(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> SolveState {
        self.state
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// The guess currently awaiting feedback
    #[must_use]
    pub const fn current_guess(&self) -> Option<&'a Word> {
        self.current
    }

    /// Advance one transition and return the new state
    ///
    /// Stepping a finished session leaves it unchanged.
    ///
    /// # Errors
    /// Fails if the puzzle collaborator fails, the board shows an invalid
    /// row, feedback never appears, or the lexicon is empty.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SolveState, SolveError> {
        self.state = match self.state {
            SolveState::AwaitingFirstGuess => self.open(rng)?,
            SolveState::AwaitingFeedback => self.advance()?,
            terminal => terminal,
        };
        Ok(self.state)
    }

    /// Step until a terminal state is reached
    ///
    /// # Errors
    /// Propagates the first error from [`SolveSession::step`].
    pub fn run<R: Rng + ?Sized>(mut self, rng: &mut R) -> Result<SolveOutcome, SolveError> {
        while !self.state.is_terminal() {
            self.step(rng)?;
        }
        log::info!(
            "solve finished {:?} after {} attempts",
            self.state,
            self.history.len()
        );
        Ok(self.into_outcome())
    }

    /// Summarise the session as it stands
    #[must_use]
    pub fn into_outcome(self) -> SolveOutcome {
        SolveOutcome {
            state: self.state,
            history: self.history,
            remaining: self.remaining,
        }
    }

    fn open<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<SolveState, SolveError> {
        if self.puzzle.is_finished()? {
            return Ok(SolveState::Exhausted);
        }
        let guess = self
            .solver
            .first_guess(self.config.randomize_first_guess, rng)?;
        self.submit(guess)?;
        Ok(SolveState::AwaitingFeedback)
    }

    fn advance(&mut self) -> Result<SolveState, SolveError> {
        let record = self.await_feedback()?;
        let solved = record.is_solved();
        self.history.push(record);
        self.current = None;

        if solved {
            return Ok(SolveState::Solved);
        }
        if self.puzzle.is_finished()? {
            return Ok(SolveState::Exhausted);
        }

        let candidates = self.solver.candidates(&self.history);
        self.remaining.push(candidates.len());

        let attempt = self.history.len() + 1;
        match self.solver.next_guess(&candidates, attempt) {
            Ok(guess) => {
                self.submit(guess)?;
                Ok(SolveState::AwaitingFeedback)
            }
            Err(SolveError::EmptyCandidateSet) => {
                log::warn!(
                    "no candidates fit {} guesses; feedback is inconsistent or the word list is incomplete",
                    self.history.len()
                );
                Ok(SolveState::Stuck)
            }
            Err(e) => Err(e),
        }
    }

    fn submit(&mut self, guess: &'a Word) -> Result<(), SolveError> {
        log::debug!("submitting guess {}: {guess}", self.history.len() + 1);
        self.puzzle.submit_guess(guess)?;
        self.current = Some(guess);
        Ok(())
    }

    /// Poll the board until the row for the current guess appears
    fn await_feedback(&mut self) -> Result<GuessRecord, SolveError> {
        let polls = self.config.feedback_polls.max(1);
        let row_index = self.history.len();

        for poll in 1..=polls {
            if !self.config.settle_delay.is_zero() {
                thread::sleep(self.config.settle_delay);
            }

            let board = self.puzzle.read_board()?;
            if let Some(row) = board.get(row_index) {
                let record = row.to_record()?;
                if let Some(current) = self.current
                    && record.word() != current
                {
                    log::warn!("board shows {} where {current} was submitted", record.word());
                }
                return Ok(record);
            }
            log::debug!("feedback for row {} not rendered yet (poll {poll}/{polls})", row_index + 1);
        }

        Err(SolveError::FeedbackTimeout { polls })
    }
}
