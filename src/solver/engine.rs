//! Main solver interface

use super::constraints::{CandidateSet, filter};
use super::selector::Strategy;
use crate::core::{History, Word};
use crate::error::SolveError;
use crate::lexicon::Lexicon;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Main puzzle solver
///
/// Binds a guess selection strategy to a lexicon. Holds no per-game state:
/// every call derives what it needs from the history it is given.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    lexicon: &'a Lexicon,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and lexicon
    pub const fn new(strategy: S, lexicon: &'a Lexicon) -> Self {
        Self { strategy, lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Get the first guess for a new game
    ///
    /// With `randomize` set, picks a uniformly random lexicon word; otherwise
    /// the strategy's choice for attempt 1 over the whole lexicon.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyLexicon` if there is nothing to guess.
    pub fn first_guess<R: Rng + ?Sized>(
        &self,
        randomize: bool,
        rng: &mut R,
    ) -> Result<&'a Word, SolveError> {
        let guess = if randomize {
            self.lexicon.words().choose(rng)
        } else {
            let all: Vec<&'a Word> = self.lexicon.words().iter().collect();
            self.strategy.select_guess(&all, 1)
        };
        guess.ok_or(SolveError::EmptyLexicon)
    }

    /// Get the next guess from the candidates left by the history
    ///
    /// `attempt` is the 1-indexed number of the guess being chosen.
    ///
    /// # Errors
    /// Returns `SolveError::EmptyCandidateSet` if no lexicon word fits the
    /// history.
    pub fn next_guess(
        &self,
        candidates: &CandidateSet<'a>,
        attempt: usize,
    ) -> Result<&'a Word, SolveError> {
        self.strategy
            .select_guess(candidates.words(), attempt)
            .ok_or(SolveError::EmptyCandidateSet)
    }

    /// Lexicon words consistent with the history
    #[must_use]
    pub fn candidates(&self, history: &History) -> CandidateSet<'a> {
        filter(self.lexicon, history)
    }
}
