//! WordleBot
//!
//! A Wordle solver that narrows a lexicon with letter constraints and picks
//! guesses by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlebot::core::{Grade, GuessRecord, History, Word};
//! use wordlebot::lexicon::Lexicon;
//! use wordlebot::solver::filter;
//!
//! let lexicon = Lexicon::new(
//!     ["crane", "slate", "stale", "irate"].map(|w| Word::new(w).unwrap()),
//! );
//!
//! let guess = Word::new("crane").unwrap();
//! let grades = Grade::score(&guess, &Word::new("slate").unwrap());
//! let history: History = [GuessRecord::new(guess, grades.to_vec()).unwrap()]
//!     .into_iter()
//!     .collect();
//!
//! let candidates = filter(&lexicon, &history);
//! assert!(candidates.contains(&Word::new("slate").unwrap()));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Word collection and letter statistics
pub mod lexicon;

// Filtering, selection and the solve loop
pub mod solver;

// External puzzle collaborators
pub mod puzzle;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::SolveError;
