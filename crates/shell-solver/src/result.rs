//! Structured outcome of a single solve.

use crate::{SolveStatus, SolverVersion, TerminationCondition};
use serde::{Deserialize, Serialize};

/// Optimization direction echoed by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProblemSense {
    Minimize,
    Maximize,
}

/// Problem dimensions reported in a solver transcript.
///
/// Every field is optional: solvers only print statistics when asked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProblemStats {
    pub sense: Option<ProblemSense>,
    pub variables: Option<u64>,
    pub constraints: Option<u64>,
    pub nonzeros: Option<u64>,
}

impl ProblemStats {
    /// Check if no statistic was reported.
    pub fn is_empty(&self) -> bool {
        self.sense.is_none()
            && self.variables.is_none()
            && self.constraints.is_none()
            && self.nonzeros.is_none()
    }
}

/// Outcome of one solve, read from the solver's transcript.
///
/// Built once through [`SolveResultBuilder`] and never mutated afterwards.
/// The caller owns the value and typically folds it into a larger results
/// record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SolveResult {
    status: SolveStatus,
    termination_condition: TerminationCondition,
    termination_message: String,
    return_code: Option<i64>,
    error_message: Option<String>,
    solver_version: Option<SolverVersion>,
    wallclock_time: Option<f64>,
    problem: ProblemStats,
}

impl SolveResult {
    /// Start building a result. Defaults to `unknown`/`unknown`.
    pub fn builder() -> SolveResultBuilder {
        SolveResultBuilder::default()
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn termination_condition(&self) -> TerminationCondition {
        self.termination_condition
    }

    /// The transcript line that identified the outcome, right-trimmed.
    /// Empty when nothing was recognized.
    pub fn termination_message(&self) -> &str {
        &self.termination_message
    }

    /// Numeric error code the solver printed, if any.
    pub fn return_code(&self) -> Option<i64> {
        self.return_code
    }

    /// Text that followed the error code, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn solver_version(&self) -> Option<SolverVersion> {
        self.solver_version
    }

    /// Solve time in seconds as reported by the solver.
    pub fn wallclock_time(&self) -> Option<f64> {
        self.wallclock_time
    }

    pub fn problem(&self) -> &ProblemStats {
        &self.problem
    }

    /// Check if the outcome was recognized at all.
    pub fn is_recognized(&self) -> bool {
        self.termination_condition != TerminationCondition::Unknown
    }
}

/// Builder for [`SolveResult`].
#[derive(Debug, Clone, Default)]
pub struct SolveResultBuilder {
    inner: SolveResult,
}

impl SolveResultBuilder {
    /// Set the classified outcome and the line that identified it.
    ///
    /// Conditions with a required status (see
    /// [`TerminationCondition::required_status`]) ignore a conflicting
    /// `status`.
    pub fn outcome(
        mut self,
        condition: TerminationCondition,
        status: SolveStatus,
        message: impl Into<String>,
    ) -> Self {
        self.inner.termination_condition = condition;
        self.inner.status = condition.reconcile_status(status);
        self.inner.termination_message = message.into();
        self
    }

    /// Set the termination message without classifying the outcome.
    pub fn termination_message(mut self, message: impl Into<String>) -> Self {
        self.inner.termination_message = message.into();
        self
    }

    pub fn return_code(mut self, code: i64) -> Self {
        self.inner.return_code = Some(code);
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.inner.error_message = Some(message.into());
        self
    }

    pub fn solver_version(mut self, version: SolverVersion) -> Self {
        self.inner.solver_version = Some(version);
        self
    }

    pub fn wallclock_time(mut self, seconds: f64) -> Self {
        self.inner.wallclock_time = Some(seconds);
        self
    }

    pub fn problem(mut self, problem: ProblemStats) -> Self {
        self.inner.problem = problem;
        self
    }

    pub fn build(self) -> SolveResult {
        self.inner
    }
}
