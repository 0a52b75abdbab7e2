//! Shared result types for optimization solvers driven as subprocesses.
//!
//! Solver-specific crates (like `shell-cplex`) classify a solver transcript
//! into these types so the orchestrating shell solver can fold them into its
//! own results without knowing which solver produced them.
//!
//! # Overview
//!
//! - [`SolverVersion`]: Version triple reported by the solver binary
//! - [`SolveStatus`]: Coarse outcome bucket
//! - [`TerminationCondition`]: Specific reason a solve ended
//! - [`SolveResult`]: Immutable outcome of one solve, built once per parse
//! - [`ProblemStats`]: Problem dimensions echoed in the transcript

mod error;
mod result;
mod status;
mod version;

pub use error::VersionParseError;
pub use result::{ProblemSense, ProblemStats, SolveResult, SolveResultBuilder};
pub use status::{SolveStatus, TerminationCondition};
pub use version::SolverVersion;
