//! Outcome rule table.

use regex::Regex;
use shell_solver::{SolveStatus, TerminationCondition};
use std::borrow::Cow;

/// How a rule recognizes a transcript line. Matching is case-sensitive.
#[derive(Debug, Clone)]
pub enum LinePattern {
    /// The phrase appears anywhere in the line.
    Contains(Cow<'static, str>),
    /// The expression matches somewhere in the line.
    Regex(Regex),
}

impl LinePattern {
    pub fn contains(phrase: impl Into<Cow<'static, str>>) -> Self {
        LinePattern::Contains(phrase.into())
    }

    pub fn is_match(&self, line: &str) -> bool {
        match self {
            LinePattern::Contains(phrase) => line.contains(&**phrase),
            LinePattern::Regex(regex) => regex.is_match(line),
        }
    }
}

/// One row of the outcome table: a line pattern and what it means.
#[derive(Debug, Clone)]
pub struct OutcomeRule {
    pattern: LinePattern,
    condition: TerminationCondition,
    status: SolveStatus,
}

impl OutcomeRule {
    /// Create a rule. A `status` that conflicts with the one `condition`
    /// requires (optimal is ok; infeasible and no solution are errors) is
    /// replaced by the required one.
    pub fn new(pattern: LinePattern, condition: TerminationCondition, status: SolveStatus) -> Self {
        Self {
            pattern,
            condition,
            status: condition.reconcile_status(status),
        }
    }

    /// Rule whose status is the one conventionally paired with `condition`.
    pub fn phrase(phrase: &'static str, condition: TerminationCondition) -> Self {
        Self::new(
            LinePattern::contains(phrase),
            condition,
            condition.default_status(),
        )
    }

    pub fn pattern(&self) -> &LinePattern {
        &self.pattern
    }

    pub fn condition(&self) -> TerminationCondition {
        self.condition
    }

    pub fn status(&self) -> SolveStatus {
        self.status
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

/// Built-in CPLEX outcome phrasings, most specific first.
///
/// Several phrases overlap (`Integer infeasible or unbounded.` against
/// `Integer infeasible.`, `no integer solution.` against `Integer optimal`),
/// so order matters: within one line the first rule that matches wins.
pub fn cplex_rules() -> Vec<OutcomeRule> {
    use TerminationCondition as T;

    vec![
        OutcomeRule::new(
            LinePattern::contains("no integer solution."),
            T::NoSolution,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Integer infeasible or unbounded."),
            T::InfeasibleOrUnbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Unbounded or infeasible."),
            T::InfeasibleOrUnbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Integer infeasible."),
            T::Infeasible,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Presolve - Infeasible."),
            T::Infeasible,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("simplex - Infeasible"),
            T::Infeasible,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Time limit exceeded, integer feasible"),
            T::MaxTimeLimit,
            SolveStatus::Aborted,
        ),
        OutcomeRule::new(
            LinePattern::contains("Integer optimal"),
            T::Optimal,
            SolveStatus::Ok,
        ),
        OutcomeRule::new(
            LinePattern::contains("simplex - Optimal"),
            T::Optimal,
            SolveStatus::Ok,
        ),
        OutcomeRule::new(
            LinePattern::contains("Barrier - Optimal"),
            T::Optimal,
            SolveStatus::Ok,
        ),
        OutcomeRule::new(
            LinePattern::contains("Integer unbounded"),
            T::Unbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("simplex - Unbounded"),
            T::Unbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("Presolve - Unbounded"),
            T::Unbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains(" - Unbounded"),
            T::Unbounded,
            SolveStatus::Error,
        ),
        OutcomeRule::new(
            LinePattern::contains("unbounded"),
            T::Unbounded,
            SolveStatus::Error,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use TerminationCondition as T;

    fn classify(line: &str) -> Option<(TerminationCondition, SolveStatus)> {
        cplex_rules()
            .into_iter()
            .find(|rule| rule.is_match(line))
            .map(|rule| (rule.condition(), rule.status()))
    }

    #[test]
    fn test_table_statuses_follow_condition_pairs() {
        for rule in cplex_rules() {
            assert_eq!(
                rule.status(),
                rule.condition().default_status(),
                "rule {:?} breaks the condition/status pairing",
                rule.pattern()
            );
        }
    }

    #[test]
    fn test_specific_phrases_win_over_neighbors() {
        assert_eq!(
            classify("MIP - Integer infeasible or unbounded."),
            Some((T::InfeasibleOrUnbounded, SolveStatus::Error))
        );
        assert_eq!(
            classify("Presolve - Unbounded or infeasible."),
            Some((T::InfeasibleOrUnbounded, SolveStatus::Error))
        );
        assert_eq!(
            classify("MIP - Integer infeasible."),
            Some((T::Infeasible, SolveStatus::Error))
        );
        assert_eq!(
            classify("MIP - Time limit exceeded, no integer solution."),
            Some((T::NoSolution, SolveStatus::Error))
        );
        assert_eq!(
            classify("MIP - Time limit exceeded, integer feasible:  Objective =  1.0e+01"),
            Some((T::MaxTimeLimit, SolveStatus::Aborted))
        );
    }

    #[test]
    fn test_optimal_phrasings() {
        for line in [
            "MIP - Integer optimal solution:  Objective =  1.0000000000e+00",
            "MIP - Integer optimal,  tolerance (0.0001/1e-06):  Objective =  2.0e+00",
            "Dual simplex - Optimal:  Objective =  1.0000000000e+01",
            "Primal simplex - Optimal:  Objective =  1.0000000000e+01",
            "Barrier - Optimal:  Objective =  1.0000000000e+01",
        ] {
            assert_eq!(classify(line), Some((T::Optimal, SolveStatus::Ok)), "{line}");
        }
    }

    #[test]
    fn test_unbounded_phrasings() {
        for line in [
            "MIP - Integer unbounded:  Objective =  0.0000000000e+00",
            "Dual simplex - Unbounded:  Objective = 0.0",
            "Presolve - Unbounded.",
            "Barrier - Unbounded.",
            "Network - Unbounded.",
            "Dual simplex - Dual infeasible, problem is unbounded.",
        ] {
            assert_eq!(classify(line), Some((T::Unbounded, SolveStatus::Error)), "{line}");
        }
    }

    #[test]
    fn test_generic_unbounded_rules_come_after_mixed_rows() {
        let rules = cplex_rules();
        let position = |condition: TerminationCondition| {
            rules
                .iter()
                .rposition(|rule| rule.condition() == condition)
                .unwrap()
        };
        let first_unbounded = rules
            .iter()
            .position(|rule| rule.condition() == T::Unbounded)
            .unwrap();
        assert!(position(T::InfeasibleOrUnbounded) < first_unbounded);
        assert_eq!(
            classify("MIP - Integer infeasible or unbounded."),
            Some((T::InfeasibleOrUnbounded, SolveStatus::Error))
        );
        assert_eq!(
            classify("Presolve - Unbounded or infeasible."),
            Some((T::InfeasibleOrUnbounded, SolveStatus::Error))
        );
    }

    #[test]
    fn test_table_leaves_limit_and_interrupt_conditions_to_callers() {
        for rule in cplex_rules() {
            assert!(
                !matches!(
                    rule.condition(),
                    T::MaxIterations | T::MaxEvaluations | T::UserInterrupt | T::Error
                ),
                "unexpected built-in rule {:?}",
                rule.pattern()
            );
        }
    }

    #[test]
    fn test_conflicting_status_is_replaced() {
        let rule = OutcomeRule::new(
            LinePattern::contains("Integer infeasible."),
            T::Infeasible,
            SolveStatus::Ok,
        );
        assert_eq!(rule.status(), SolveStatus::Error);

        let rule = OutcomeRule::new(LinePattern::contains("done"), T::Optimal, SolveStatus::Warning);
        assert_eq!(rule.status(), SolveStatus::Ok);

        let rule = OutcomeRule::new(LinePattern::contains("stop"), T::Other, SolveStatus::Aborted);
        assert_eq!(rule.status(), SolveStatus::Aborted);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(classify("mip - integer infeasible."), None);
        assert_eq!(classify("Solution time =    0.00 sec."), None);
    }

    #[test]
    fn test_phrase_rule_uses_default_status() {
        let rule = OutcomeRule::phrase("Aborted, no integer solution", T::UserInterrupt);
        assert_eq!(rule.status(), SolveStatus::Aborted);
        assert!(rule.is_match("MIP - Aborted, no integer solution."));
    }

    #[test]
    fn test_regex_pattern() {
        let pattern = LinePattern::Regex(Regex::new(r"^Node limit exceeded").unwrap());
        assert!(pattern.is_match("Node limit exceeded, integer feasible."));
        assert!(!pattern.is_match("MIP - Node limit exceeded"));
    }
}
