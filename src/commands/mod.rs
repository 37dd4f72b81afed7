//! Command implementations

pub mod assist;
pub mod benchmark;
pub mod solve;

pub use assist::run_assist;
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use solve::{SolveConfig, solve_word};
