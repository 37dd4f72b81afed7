//! Guess records and the append-only guess history

use super::grade::Grade;
use super::word::Word;
use crate::error::SolveError;

/// One submitted guess together with its per-letter grades
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    grades: Vec<Grade>,
}

impl GuessRecord {
    /// Create a record, rejecting grade sequences of the wrong length
    ///
    /// # Errors
    /// Returns `SolveError::InvalidGuessRecord` if `grades` does not have one
    /// entry per letter of `word`.
    pub fn new(word: Word, grades: Vec<Grade>) -> Result<Self, SolveError> {
        if grades.len() != word.chars().len() {
            return Err(SolveError::InvalidGuessRecord {
                word: word.text().to_string(),
                grades: grades.len(),
            });
        }
        Ok(Self { word, grades })
    }

    /// Build a record from rendered letters and evaluation names
    ///
    /// # Errors
    /// Fails if the letters are not a valid word, an evaluation is not a
    /// recognised grade, or the counts differ.
    pub fn from_rendered<S: AsRef<str>>(letters: &str, evaluations: &[S]) -> Result<Self, SolveError> {
        let word = Word::new(letters)?;
        let grades = evaluations
            .iter()
            .map(|e| e.as_ref().parse())
            .collect::<Result<Vec<Grade>, _>>()?;
        Self::new(word, grades)
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Whether every letter was graded correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grades.iter().all(|&g| g == Grade::Correct)
    }
}

/// Ordered, append-only list of guess records for one solve
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GuessRecord>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append the next record
    pub fn push(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<GuessRecord> for History {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Grade::{Absent, Correct, Present};

    #[test]
    fn record_requires_one_grade_per_letter() {
        let word = Word::new("crane").unwrap();
        let err = GuessRecord::new(word, vec![Correct; 4]).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidGuessRecord { ref word, grades: 4 } if word == "crane"
        ));
    }

    #[test]
    fn record_from_rendered_board() {
        let record =
            GuessRecord::from_rendered("crane", &["absent", "present", "correct", "absent", "correct"])
                .unwrap();
        assert_eq!(record.word().text(), "crane");
        assert_eq!(record.grades(), [Absent, Present, Correct, Absent, Correct]);
        assert!(!record.is_solved());
    }

    #[test]
    fn record_from_rendered_rejects_unknown_evaluation() {
        let err = GuessRecord::from_rendered("crane", &["absent", "tbd", "correct", "absent", "correct"])
            .unwrap_err();
        assert!(matches!(err, SolveError::UnknownGrade(_)));
    }

    #[test]
    fn record_from_rendered_rejects_partial_row() {
        let err = GuessRecord::from_rendered("crane", &["absent", "present"]).unwrap_err();
        assert!(matches!(err, SolveError::InvalidGuessRecord { grades: 2, .. }));
    }

    #[test]
    fn record_solved_when_all_correct() {
        let record = GuessRecord::new(Word::new("crane").unwrap(), vec![Correct; 5]).unwrap();
        assert!(record.is_solved());
    }

    #[test]
    fn history_appends_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.push(GuessRecord::new(Word::new("crane").unwrap(), vec![Absent; 5]).unwrap());
        history.push(GuessRecord::new(Word::new("slate").unwrap(), vec![Correct; 5]).unwrap());

        let words: Vec<&str> = history.iter().map(|r| r.word().text()).collect();
        assert_eq!(words, ["crane", "slate"]);
        assert_eq!(history.len(), 2);
        assert!(history.last().unwrap().is_solved());
    }
}
