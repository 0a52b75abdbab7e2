//! Classification of CPLEX interactive-shell transcripts.
//!
//! The transcript is scanned line by line against an ordered table of
//! [`OutcomeRule`]s; the first line matching any rule decides the
//! termination condition. Error codes, the solver banner, solve time and
//! problem statistics are read from the same pass, independently of the
//! outcome.

mod facts;
mod parser;
mod rules;

pub use parser::LogParser;
pub use rules::{LinePattern, OutcomeRule, cplex_rules};

use shell_solver::SolveResult;

/// Parse a transcript with the built-in CPLEX rule table.
pub fn parse_log(text: &str) -> SolveResult {
    LogParser::new().parse(text)
}
