//! Transcript parser.

use super::facts::TranscriptFacts;
use super::rules::{OutcomeRule, cplex_rules};
use shell_solver::SolveResult;
use tracing::{debug, trace};

/// Classifies CPLEX shell transcripts into [`SolveResult`]s.
///
/// Parsing is a pure function of the text and the rule table; the parser
/// keeps no state between calls.
#[derive(Debug, Clone)]
pub struct LogParser {
    rules: Vec<OutcomeRule>,
    /// Number of caller-supplied rules at the front of `rules`.
    custom: usize,
}

impl Default for LogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LogParser {
    /// Create a parser with the built-in CPLEX rule table.
    pub fn new() -> Self {
        Self {
            rules: cplex_rules(),
            custom: 0,
        }
    }

    /// Create a parser that uses exactly `rules`, in order.
    pub fn with_rules(rules: Vec<OutcomeRule>) -> Self {
        let custom = rules.len();
        Self { rules, custom }
    }

    /// Add a rule that is tried after earlier custom rules but before the
    /// built-in table.
    pub fn with_rule(mut self, rule: OutcomeRule) -> Self {
        self.rules.insert(self.custom, rule);
        self.custom += 1;
        self
    }

    /// The rule table in evaluation order.
    pub fn rules(&self) -> &[OutcomeRule] {
        &self.rules
    }

    /// Classify a complete transcript.
    ///
    /// Never fails: an unrecognized transcript yields `unknown`/`unknown`.
    pub fn parse(&self, text: &str) -> SolveResult {
        let mut outcome: Option<(&OutcomeRule, &str)> = None;
        let mut facts = TranscriptFacts::default();

        for (index, line) in text.lines().enumerate() {
            if outcome.is_none() {
                if let Some(rule) = self.rules.iter().find(|rule| rule.is_match(line)) {
                    trace!(
                        component = "transcript",
                        operation = "parse",
                        status = "matched",
                        line = index + 1,
                        condition = rule.condition().as_str(),
                        "Outcome line found"
                    );
                    outcome = Some((rule, line.trim_end()));
                }
            }
            facts.observe(line);
        }

        let mut builder = SolveResult::builder();
        builder = match outcome {
            Some((rule, line)) => builder.outcome(rule.condition(), rule.status(), line),
            None => match facts.error_line.take() {
                Some(line) => builder.termination_message(line),
                None => builder,
            },
        };
        if let Some(code) = facts.return_code {
            builder = builder.return_code(code);
        }
        if let Some(message) = facts.error_message {
            builder = builder.error_message(message);
        }
        if let Some(version) = facts.solver_version {
            builder = builder.solver_version(version);
        }
        if let Some(seconds) = facts.wallclock_time {
            builder = builder.wallclock_time(seconds);
        }
        let result = builder.problem(facts.problem).build();

        debug!(
            component = "transcript",
            operation = "parse",
            status = result.status().as_str(),
            condition = result.termination_condition().as_str(),
            return_code = result.return_code(),
            "Classified solver transcript"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::LinePattern;
    use shell_solver::{SolveStatus, TerminationCondition};

    const NO_SOLUTION_LOG: &str = "
MIP - Time limit exceeded, no integer solution.
Current MIP best bound =  0.0000000000e+00 (gap is infinite)
Solution time =    0.00 sec.  Iterations = 0  Nodes = 0
Deterministic time = 0.00 ticks  (0.20 ticks/sec)

CPLEX> CPLEX Error  1217: No solution exists.
No file written.
CPLEX>";

    #[test]
    fn test_no_solution_log() {
        let result = LogParser::new().parse(NO_SOLUTION_LOG);
        assert_eq!(result.status(), SolveStatus::Error);
        assert_eq!(
            result.termination_condition(),
            TerminationCondition::NoSolution
        );
        assert_eq!(
            result.termination_message(),
            "MIP - Time limit exceeded, no integer solution."
        );
        assert_eq!(result.return_code(), Some(1217));
        assert_eq!(result.error_message(), Some("No solution exists."));
        assert_eq!(result.wallclock_time(), Some(0.0));
    }

    #[test]
    fn test_empty_text_is_unknown() {
        let result = LogParser::new().parse("");
        assert_eq!(result.status(), SolveStatus::Unknown);
        assert_eq!(result.termination_condition(), TerminationCondition::Unknown);
        assert_eq!(result.termination_message(), "");
        assert_eq!(result.return_code(), None);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Dual simplex - Optimal:  Objective =  1.0e+00\n\
                    MIP - Integer infeasible.\n";
        let result = LogParser::new().parse(text);
        assert_eq!(result.termination_condition(), TerminationCondition::Optimal);
        assert_eq!(
            result.termination_message(),
            "Dual simplex - Optimal:  Objective =  1.0e+00"
        );
    }

    #[test]
    fn test_message_is_right_trimmed_only() {
        let text = "  MIP - Integer infeasible.  \t\r\n";
        let result = LogParser::new().parse(text);
        assert_eq!(result.termination_message(), "  MIP - Integer infeasible.");
    }

    #[test]
    fn test_error_line_without_outcome() {
        let text = "CPLEX> CPLEX Error  1422: Could not open file 'missing.lp'.\n";
        let result = LogParser::new().parse(text);
        assert_eq!(result.status(), SolveStatus::Unknown);
        assert_eq!(result.termination_condition(), TerminationCondition::Unknown);
        assert_eq!(
            result.termination_message(),
            "CPLEX> CPLEX Error  1422: Could not open file 'missing.lp'."
        );
        assert_eq!(result.return_code(), Some(1422));
    }

    #[test]
    fn test_custom_rules_run_before_builtins() {
        let parser = LogParser::new()
            .with_rule(OutcomeRule::phrase(
                "Node limit exceeded, integer feasible",
                TerminationCondition::MaxEvaluations,
            ))
            .with_rule(OutcomeRule::new(
                LinePattern::contains("Aborted"),
                TerminationCondition::UserInterrupt,
                SolveStatus::Aborted,
            ));
        assert_eq!(parser.rules().len(), cplex_rules().len() + 2);
        assert_eq!(
            parser.rules()[0].condition(),
            TerminationCondition::MaxEvaluations
        );
        assert_eq!(
            parser.rules()[1].condition(),
            TerminationCondition::UserInterrupt
        );

        let result = parser.parse("MIP - Node limit exceeded, integer feasible:  Objective = 3.0");
        assert_eq!(
            result.termination_condition(),
            TerminationCondition::MaxEvaluations
        );
        assert_eq!(result.status(), SolveStatus::Aborted);

        let result = parser.parse("MIP - Aborted, no integer solution.");
        assert_eq!(
            result.termination_condition(),
            TerminationCondition::UserInterrupt
        );
    }

    #[test]
    fn test_custom_rule_cannot_break_status_pairing() {
        let parser = LogParser::new().with_rule(OutcomeRule::new(
            LinePattern::contains("Integer infeasible."),
            TerminationCondition::Infeasible,
            SolveStatus::Ok,
        ));
        let result = parser.parse("MIP - Integer infeasible.\n");
        assert_eq!(result.termination_condition(), TerminationCondition::Infeasible);
        assert_eq!(result.status(), SolveStatus::Error);
    }

    #[test]
    fn test_with_rules_replaces_table() {
        let parser = LogParser::with_rules(vec![OutcomeRule::phrase(
            "Solve complete",
            TerminationCondition::Other,
        )]);
        let result = parser.parse("MIP - Integer infeasible.\nSolve complete\n");
        assert_eq!(result.termination_condition(), TerminationCondition::Other);
        assert_eq!(result.status(), SolveStatus::Warning);
        assert_eq!(result.termination_message(), "Solve complete");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let parser = LogParser::new();
        assert_eq!(parser.parse(NO_SOLUTION_LOG), parser.parse(NO_SOLUTION_LOG));
    }
}
