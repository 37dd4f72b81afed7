//! Guess selection strategies
//!
//! Defines the Strategy trait and the letter-frequency strategy the bot plays
//! with.

use crate::core::Word;
use crate::lexicon::LetterFrequency;

/// A strategy for selecting the next guess from the current candidates
pub trait Strategy {
    /// Select the best guess for the given attempt number (1-indexed)
    ///
    /// Returns `None` only if `candidates` is empty.
    fn select_guess<'a>(&self, candidates: &[&'a Word], attempt: usize) -> Option<&'a Word>;
}

/// Which letters of a word contribute to its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Early attempts: each distinct letter counts once, favouring words
    /// that test many different letters
    Coverage,
    /// Late attempts: every letter occurrence counts, favouring the most
    /// probable word
    Likelihood,
}

impl Phase {
    /// Phase for `attempt` when the first `coverage_attempts` attempts are
    /// spent on coverage
    #[must_use]
    pub const fn for_attempt(attempt: usize, coverage_attempts: usize) -> Self {
        if attempt <= coverage_attempts {
            Self::Coverage
        } else {
            Self::Likelihood
        }
    }
}

/// Scores words by the lexicon frequency of their letters
///
/// Ties are broken towards the lexicographically smallest word.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyStrategy {
    frequency: LetterFrequency,
    /// Attempts up to and including this one use `Phase::Coverage`
    pub coverage_attempts: usize,
}

impl FrequencyStrategy {
    /// Default number of coverage attempts (attempts 1-3)
    pub const DEFAULT_COVERAGE_ATTEMPTS: usize = 3;

    #[must_use]
    pub const fn new(frequency: LetterFrequency) -> Self {
        Self {
            frequency,
            coverage_attempts: Self::DEFAULT_COVERAGE_ATTEMPTS,
        }
    }

    #[must_use]
    pub const fn with_coverage_attempts(mut self, coverage_attempts: usize) -> Self {
        self.coverage_attempts = coverage_attempts;
        self
    }

    #[must_use]
    pub const fn phase(&self, attempt: usize) -> Phase {
        Phase::for_attempt(attempt, self.coverage_attempts)
    }

    /// Score a word for the given attempt
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    /// use wordlebot::lexicon::Lexicon;
    /// use wordlebot::solver::FrequencyStrategy;
    ///
    /// let lexicon = Lexicon::new(["sassy", "crane"].map(|w| Word::new(w).unwrap()));
    /// let strategy = FrequencyStrategy::new(*lexicon.frequency());
    /// let sassy = Word::new("sassy").unwrap();
    ///
    /// // s, a, y once each early; s three times late
    /// assert_eq!(strategy.score(&sassy, 1), 1 + 2 + 1);
    /// assert_eq!(strategy.score(&sassy, 5), 1 + 2 + 1 + 1 + 1);
    /// ```
    #[must_use]
    pub fn score(&self, word: &Word, attempt: usize) -> u32 {
        match self.phase(attempt) {
            Phase::Coverage => word
                .distinct_letters()
                .into_iter()
                .map(|letter| self.frequency.get(letter))
                .sum(),
            Phase::Likelihood => word
                .chars()
                .iter()
                .map(|&letter| self.frequency.get(letter))
                .sum(),
        }
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(&self, candidates: &[&'a Word], attempt: usize) -> Option<&'a Word> {
        candidates
            .iter()
            .map(|&word| (self.score(word, attempt), word))
            .max_by(|(score_a, word_a), (score_b, word_b)| {
                score_a.cmp(score_b).then_with(|| word_b.cmp(word_a))
            })
            .map(|(score, word)| {
                log::debug!(
                    "attempt {attempt}: selected {word} (score {score}, {:?}) from {} candidates",
                    self.phase(attempt),
                    candidates.len()
                );
                word
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    fn lexicon(words: &[&str]) -> Lexicon {
        Lexicon::new(words.iter().map(|w| Word::new(*w).unwrap()))
    }

    fn select<'a>(strategy: &FrequencyStrategy, lex: &'a Lexicon, attempt: usize) -> &'a str {
        let candidates: Vec<&Word> = lex.words().iter().collect();
        strategy.select_guess(&candidates, attempt).unwrap().text()
    }

    #[test]
    fn phase_boundary() {
        assert_eq!(Phase::for_attempt(1, 3), Phase::Coverage);
        assert_eq!(Phase::for_attempt(3, 3), Phase::Coverage);
        assert_eq!(Phase::for_attempt(4, 3), Phase::Likelihood);
        assert_eq!(Phase::for_attempt(6, 3), Phase::Likelihood);
    }

    #[test]
    fn score_changes_between_phases_for_repeated_letters() {
        let lex = lexicon(&["eerie", "crane", "slate", "tease"]);
        let strategy = FrequencyStrategy::new(*lex.frequency());
        let eerie = Word::new("eerie").unwrap();
        let crane = Word::new("crane").unwrap();

        // e is in all four words
        assert_eq!(lex.frequency().get(b'e'), 4);
        assert_ne!(strategy.score(&eerie, 3), strategy.score(&eerie, 5));
        assert!(strategy.score(&eerie, 5) > strategy.score(&eerie, 3));
        // No repeated letters: both phases agree
        assert_eq!(strategy.score(&crane, 3), strategy.score(&crane, 5));
    }

    #[test]
    fn early_attempts_prefer_coverage_late_prefer_repeats() {
        // a and e are everywhere; "eerie" only wins once repeats count
        let lex = lexicon(&["eerie", "arise", "aerie", "cater", "eager"]);
        let strategy = FrequencyStrategy::new(*lex.frequency());

        let early = select(&strategy, &lex, 1);
        let late = select(&strategy, &lex, 4);
        assert_ne!(early, late);
        assert_eq!(late, "eerie");
    }

    #[test]
    fn selection_is_deterministic() {
        let lex = lexicon(&["crane", "slate", "trace", "raise", "stare"]);
        let strategy = FrequencyStrategy::new(*lex.frequency());
        for attempt in 1..=6 {
            assert_eq!(select(&strategy, &lex, attempt), select(&strategy, &lex, attempt));
        }
    }

    #[test]
    fn ties_break_lexicographically() {
        // Anagrams always tie
        let lex = lexicon(&["stale", "slate", "steal", "least"]);
        let strategy = FrequencyStrategy::new(*lex.frequency());
        assert_eq!(select(&strategy, &lex, 1), "least");
        assert_eq!(select(&strategy, &lex, 5), "least");
    }

    #[test]
    fn ties_ignore_candidate_order() {
        let lex = lexicon(&["stale", "slate", "least"]);
        let strategy = FrequencyStrategy::new(*lex.frequency());
        let mut candidates: Vec<&Word> = lex.words().iter().collect();
        candidates.reverse();
        assert_eq!(strategy.select_guess(&candidates, 2).unwrap().text(), "least");
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let strategy = FrequencyStrategy::new(*lexicon(&["crane"]).frequency());
        assert!(strategy.select_guess(&[], 1).is_none());
    }

    #[test]
    fn coverage_attempts_is_configurable() {
        let strategy = FrequencyStrategy::new(*lexicon(&["crane"]).frequency())
            .with_coverage_attempts(1);
        assert_eq!(strategy.phase(1), Phase::Coverage);
        assert_eq!(strategy.phase(2), Phase::Likelihood);
    }
}
