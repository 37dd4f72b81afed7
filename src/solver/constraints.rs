//! Candidate filtering from guess history
//!
//! Every guess record compiles into a list of [`Constraint`]s. Filtering
//! starts from the whole lexicon and narrows the working set record by
//! record, so the candidate set is always rebuilt from scratch.

use crate::core::{Grade, GuessRecord, History, Word};
use crate::lexicon::Lexicon;

/// A single pure restriction on candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint<'h> {
    /// The word was already guessed
    Exclude(&'h Word),
    /// The letter is not in the secret at all
    Lacks(u8),
    /// The letter is not at this position
    NotAt(u8, usize),
    /// The letter is in the secret but not at this position
    PresentNotAt(u8, usize),
    /// The letter is at this position
    At(u8, usize),
}

impl<'h> Constraint<'h> {
    /// Compile one guess record into constraints
    ///
    /// An absent letter only rules out the letter entirely when no other copy
    /// of it in the same guess was graded correct or present. Otherwise the
    /// secret holds a limited number of that letter and only this position is
    /// ruled out.
    #[must_use]
    pub fn from_record(record: &'h GuessRecord) -> Vec<Self> {
        let guess = record.word();
        let grades = record.grades();
        let mut constraints = Vec::with_capacity(grades.len() + 1);
        constraints.push(Self::Exclude(guess));

        for (i, (&letter, &grade)) in guess.chars().iter().zip(grades).enumerate() {
            let constraint = match grade {
                Grade::Absent => {
                    let all_absent = guess
                        .chars()
                        .iter()
                        .zip(grades)
                        .filter(|&(&l, _)| l == letter)
                        .all(|(_, &g)| g == Grade::Absent);
                    if all_absent {
                        Self::Lacks(letter)
                    } else {
                        Self::NotAt(letter, i)
                    }
                }
                Grade::Present => Self::PresentNotAt(letter, i),
                Grade::Correct => Self::At(letter, i),
            };
            constraints.push(constraint);
        }

        constraints
    }

    /// Whether `word` satisfies this constraint
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        match *self {
            Self::Exclude(guess) => word != guess,
            Self::Lacks(letter) => !word.has_letter(letter),
            Self::NotAt(letter, i) => word.char_at(i) != letter,
            Self::PresentNotAt(letter, i) => word.has_letter(letter) && word.char_at(i) != letter,
            Self::At(letter, i) => word.char_at(i) == letter,
        }
    }
}

/// Lexicon words consistent with every guess record so far
///
/// Words keep lexicon (lexicographic) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet<'a> {
    words: Vec<&'a Word>,
}

impl<'a> CandidateSet<'a> {
    /// The unfiltered candidate set: every lexicon word
    #[must_use]
    pub fn all(lexicon: &'a Lexicon) -> Self {
        Self {
            words: lexicon.words().iter().collect(),
        }
    }

    /// Remove every word rejected by `constraint`
    pub fn retain(&mut self, constraint: &Constraint<'_>) {
        self.words.retain(|word| constraint.admits(word));
    }

    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }
}

/// Compute the candidate set for `history` from the full lexicon
///
/// # Examples
/// ```
/// use wordlebot::core::{Grade, GuessRecord, History, Word};
/// use wordlebot::lexicon::Lexicon;
/// use wordlebot::solver::filter;
///
/// let lexicon = Lexicon::new(["apple", "angle", "amble"].map(|w| Word::new(w).unwrap()));
/// let mut history = History::new();
/// history.push(GuessRecord::new(
///     Word::new("apple").unwrap(),
///     Grade::parse_line("G--GG").unwrap(),
/// ).unwrap());
///
/// let candidates = filter(&lexicon, &history);
/// let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
/// assert_eq!(texts, ["amble", "angle"]);
/// ```
#[must_use]
pub fn filter<'a>(lexicon: &'a Lexicon, history: &History) -> CandidateSet<'a> {
    let mut candidates = CandidateSet::all(lexicon);

    for record in history {
        for constraint in Constraint::from_record(record) {
            candidates.retain(&constraint);
        }
        log::trace!(
            "after {} {}: {} candidates",
            record.word(),
            crate::core::grades_to_emoji(record.grades()),
            candidates.len()
        );
    }

    log::debug!(
        "{} of {} words consistent with {} guesses",
        candidates.len(),
        lexicon.len(),
        history.len()
    );
    candidates
}
