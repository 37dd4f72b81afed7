//! Solving engine
//!
//! Candidate filtering, guess selection and the solve loop.

mod constraints;
mod engine;
mod selector;
pub mod session;

pub use constraints::{CandidateSet, Constraint, filter};
pub use engine::Solver;
pub use selector::{FrequencyStrategy, Phase, Strategy};
pub use session::{SessionConfig, SolveOutcome, SolveSession, SolveState};
