//! Core domain types for the puzzle
//!
//! Words, per-letter grades and guess history. Everything here is pure data
//! with no I/O.

mod grade;
mod record;
mod word;

pub use grade::{Grade, grades_to_emoji};
pub use record::{GuessRecord, History};
pub use word::{WORD_LENGTH, Word, WordError};
