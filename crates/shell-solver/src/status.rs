//! Solve status and termination condition types.

use serde::{Deserialize, Serialize};

/// Coarse-grained outcome of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveStatus {
    /// The solver finished normally.
    Ok,
    /// The solver finished but reported something the caller should check.
    Warning,
    /// The solver failed or proved there is no usable solution.
    Error,
    /// The solver stopped early on a limit or interrupt.
    Aborted,
    /// The outcome could not be determined.
    #[default]
    Unknown,
}

impl SolveStatus {
    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Ok => "ok",
            SolveStatus::Warning => "warning",
            SolveStatus::Error => "error",
            SolveStatus::Aborted => "aborted",
            SolveStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reason a solve ended.
///
/// The built-in CPLEX table never reports `MaxIterations`, `MaxEvaluations`,
/// `UserInterrupt` or `Error`; those come only from caller-supplied rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerminationCondition {
    /// Proven optimal solution found.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Solver could not tell infeasible from unbounded.
    InfeasibleOrUnbounded,
    /// A limit was hit before any solution was found.
    NoSolution,
    /// Time limit reached (a feasible solution may exist).
    MaxTimeLimit,
    /// Iteration limit reached (a feasible solution may exist).
    MaxIterations,
    /// Node or evaluation limit reached.
    MaxEvaluations,
    /// The run was interrupted by the user.
    UserInterrupt,
    /// The solver reported an internal failure.
    Error,
    /// Recognized, but none of the above.
    Other,
    /// Nothing recognizable was reported.
    #[default]
    Unknown,
}

impl TerminationCondition {
    /// Status that accompanies this condition when it is read from a log.
    ///
    /// `Optimal` always pairs with [`SolveStatus::Ok`]; `Infeasible` and
    /// `NoSolution` always pair with [`SolveStatus::Error`].
    pub fn default_status(self) -> SolveStatus {
        match self {
            TerminationCondition::Optimal => SolveStatus::Ok,
            TerminationCondition::Infeasible
            | TerminationCondition::Unbounded
            | TerminationCondition::InfeasibleOrUnbounded
            | TerminationCondition::NoSolution
            | TerminationCondition::Error => SolveStatus::Error,
            TerminationCondition::MaxTimeLimit
            | TerminationCondition::MaxIterations
            | TerminationCondition::MaxEvaluations
            | TerminationCondition::UserInterrupt => SolveStatus::Aborted,
            TerminationCondition::Other => SolveStatus::Warning,
            TerminationCondition::Unknown => SolveStatus::Unknown,
        }
    }

    /// Status this condition is tied to regardless of what a rule says.
    ///
    /// `Optimal` is only ever `ok`; `Infeasible` and `NoSolution` are only
    /// ever `error`. Other conditions leave the status to the caller.
    pub fn required_status(self) -> Option<SolveStatus> {
        match self {
            TerminationCondition::Optimal => Some(SolveStatus::Ok),
            TerminationCondition::Infeasible | TerminationCondition::NoSolution => {
                Some(SolveStatus::Error)
            }
            _ => None,
        }
    }

    /// `status`, unless this condition requires a different one.
    pub fn reconcile_status(self, status: SolveStatus) -> SolveStatus {
        self.required_status().unwrap_or(status)
    }

    /// Check if the condition may come with a usable solution.
    pub fn has_solution(self) -> bool {
        matches!(
            self,
            TerminationCondition::Optimal
                | TerminationCondition::MaxTimeLimit
                | TerminationCondition::MaxIterations
                | TerminationCondition::MaxEvaluations
        )
    }

    /// Get a human-readable string representation.
    pub fn as_str(self) -> &'static str {
        match self {
            TerminationCondition::Optimal => "optimal",
            TerminationCondition::Infeasible => "infeasible",
            TerminationCondition::Unbounded => "unbounded",
            TerminationCondition::InfeasibleOrUnbounded => "infeasibleOrUnbounded",
            TerminationCondition::NoSolution => "noSolution",
            TerminationCondition::MaxTimeLimit => "maxTimeLimit",
            TerminationCondition::MaxIterations => "maxIterations",
            TerminationCondition::MaxEvaluations => "maxEvaluations",
            TerminationCondition::UserInterrupt => "userInterrupt",
            TerminationCondition::Error => "error",
            TerminationCondition::Other => "other",
            TerminationCondition::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TerminationCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
