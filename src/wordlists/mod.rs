//! Word lists for the solver
//!
//! The default lexicon is embedded in the binary; a plain text file can be
//! loaded instead.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
