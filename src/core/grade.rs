//! Per-letter feedback grades
//!
//! Each letter of a submitted guess is graded one of:
//! - `Correct` (green): the letter is at this position in the secret
//! - `Present` (yellow): the letter is in the secret, elsewhere
//! - `Absent` (gray): the letter is not in the secret, or every copy of it in
//!   the secret has already been accounted for by other positions

use super::word::{WORD_LENGTH, Word};
use crate::error::SolveError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Correct,
    Present,
    Absent,
}

impl Grade {
    /// Grade `guess` against `secret` using the puzzle's feedback rules
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unmatched copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Grade, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let secret = Word::new("abyss").unwrap();
    /// assert_eq!(
    ///     Grade::score(&guess, &secret),
    ///     [Grade::Present, Grade::Present, Grade::Absent, Grade::Correct, Grade::Present]
    /// );
    /// ```
    #[must_use]
    pub fn score(guess: &Word, secret: &Word) -> [Self; WORD_LENGTH] {
        let mut result = [Self::Absent; WORD_LENGTH];
        let mut available = secret.char_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(secret.chars()).enumerate() {
            if g == s {
                result[i] = Self::Correct;
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Self::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[i] = Self::Present;
                *count -= 1;
            }
        }

        result
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/🟩 for correct, `Y`/🟨 for present and `-`, `_`, `X`, `.`,
    /// ⬛ or ⬜ for absent (letters in either case).
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '.' | 'X' | 'x' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Parse a whole feedback line such as `GY--G` or `🟩🟨⬛⬛🟩`
    ///
    /// Whitespace is ignored. Returns `None` if any character is not a grade;
    /// the length is left for `GuessRecord` to validate.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Vec<Self>> {
        line.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_char)
            .collect()
    }

    /// Name used by the rendered board for this grade
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Emoji square used in the shared result grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grade {
    type Err = SolveError;

    /// Parse a rendered evaluation (`correct`, `present`, `absent`) or a
    /// single feedback character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "correct" => return Ok(Self::Correct),
            "present" => return Ok(Self::Present),
            "absent" => return Ok(Self::Absent),
            _ => {}
        }

        let mut chars = trimmed.chars();
        let grade = match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => None,
        };
        grade.ok_or_else(|| SolveError::UnknownGrade(s.to_string()))
    }
}

/// Render a grade sequence as emoji squares
#[must_use]
pub fn grades_to_emoji(grades: &[Grade]) -> String {
    grades.iter().map(|g| g.emoji()).collect()
}
