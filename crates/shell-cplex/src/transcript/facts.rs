//! Transcript facts that do not decide the outcome.

use regex::Regex;
use shell_solver::{ProblemSense, ProblemStats, SolverVersion};
use std::sync::OnceLock;
use tracing::trace;

struct Patterns {
    error: Regex,
    banner: Regex,
    solution_time: Regex,
    sense: Regex,
    variables: Regex,
    constraints: Regex,
    nonzeros: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        error: compile(r"CPLEX Error\s+(\d+):[ \t]*(.*)"),
        banner: compile(
            r"(?:Interactive Optimizer(?:\s+[A-Za-z]+)*|ILOG CPLEX|Version identifier:)\s+(\d+(?:\.\d+){0,3})",
        ),
        solution_time: compile(r"Solution time\s*=\s*(\d+(?:\.\d*)?)\s*sec"),
        sense: compile(r"Objective sense\s*:\s*(Minimize|Maximize)"),
        variables: compile(r"^(?:CPLEX>)?\s*Variables\s*:\s*(\d+)"),
        constraints: compile(r"^(?:CPLEX>)?\s*Linear constraints\s*:\s*(\d+)"),
        nonzeros: compile(r"^(?:CPLEX>)?\s*Nonzeros\s*:\s*(\d+)"),
    })
}

fn compile(pattern: &str) -> Regex {
    // Patterns are literals above; failure here is a programming error.
    Regex::new(pattern).expect("transcript pattern must compile")
}

fn capture<'t>(regex: &Regex, line: &'t str) -> Option<&'t str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Facts collected over one transcript.
///
/// The first error line, banner and statistic seen win; solve time keeps the
/// last value because CPLEX reports it again after every optimization.
#[derive(Debug, Default)]
pub(super) struct TranscriptFacts {
    pub error_line: Option<String>,
    pub return_code: Option<i64>,
    pub error_message: Option<String>,
    pub solver_version: Option<SolverVersion>,
    pub wallclock_time: Option<f64>,
    pub problem: ProblemStats,
}

impl TranscriptFacts {
    pub(super) fn observe(&mut self, line: &str) {
        let patterns = patterns();

        if self.return_code.is_none() {
            self.observe_error(&patterns.error, line);
        }

        if self.solver_version.is_none() {
            if let Some(raw) = capture(&patterns.banner, line) {
                self.solver_version = raw.parse().ok();
            }
        }

        if let Some(raw) = capture(&patterns.solution_time, line) {
            if let Ok(seconds) = raw.parse() {
                self.wallclock_time = Some(seconds);
            }
        }

        let problem = &mut self.problem;
        if problem.sense.is_none() {
            problem.sense = capture(&patterns.sense, line).map(|sense| match sense {
                "Maximize" => ProblemSense::Maximize,
                _ => ProblemSense::Minimize,
            });
        }
        if problem.variables.is_none() {
            problem.variables = capture(&patterns.variables, line).and_then(|n| n.parse().ok());
        }
        if problem.constraints.is_none() {
            problem.constraints = capture(&patterns.constraints, line).and_then(|n| n.parse().ok());
        }
        if problem.nonzeros.is_none() {
            problem.nonzeros = capture(&patterns.nonzeros, line).and_then(|n| n.parse().ok());
        }
    }

    fn observe_error(&mut self, regex: &Regex, line: &str) {
        let Some(caps) = regex.captures(line) else {
            return;
        };
        let digits = caps.get(1).map_or("", |m| m.as_str());
        let Ok(code) = digits.parse::<i64>() else {
            trace!(
                component = "transcript",
                operation = "parse",
                status = "skipped",
                digits,
                "Error code does not fit in an integer"
            );
            return;
        };

        self.return_code = Some(code);
        self.error_line = Some(line.trim_end().to_string());
        self.error_message = caps
            .get(2)
            .map(|m| m.as_str().trim())
            .filter(|message| !message.is_empty())
            .map(str::to_string);
    }
}
