//! CPLEX interactive-shell support for shell-invoked solves.
//!
//! Two independent pieces sit between the process that runs `cplex` and the
//! caller that wants a structured answer:
//!
//! - [`FileNameValidator`] checks (and quotes, when the solver version allows
//!   it) file names before they go on the CPLEX command line.
//! - [`LogParser`] turns the captured console transcript into a
//!   [`SolveResult`](shell_solver::SolveResult).
//!
//! Neither performs I/O. Both are plain values and safe to share across
//! threads.

mod error;
pub mod filename;
pub mod transcript;

pub use error::FileNameError;
pub use filename::{FileNameValidator, ValidatorConfig, validate_file_name};
pub use transcript::{LinePattern, LogParser, OutcomeRule, parse_log};
