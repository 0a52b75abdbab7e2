//! Error types for command-line file name validation.

use shell_solver::SolverVersion;

/// Error returned when a file name cannot be passed to the CPLEX shell.
///
/// Both variants are caller configuration errors: the path was built wrong
/// for this host or for this solver release, and nothing downstream can
/// repair it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNameError {
    /// The path contains the separator this platform does not use.
    UnallowedCharacter {
        /// The offending character.
        character: char,
        /// What the file is for, e.g. `"log"` or `"solution"`.
        purpose: String,
    },
    /// The path contains a space and the solver cannot take quoted names.
    SpaceDetected {
        purpose: String,
        /// Version that rejected the name.
        version: SolverVersion,
    },
}

impl FileNameError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            FileNameError::UnallowedCharacter { .. } => "FILENAME_UNALLOWED_CHARACTER",
            FileNameError::SpaceDetected { .. } => "FILENAME_SPACE_DETECTED",
        }
    }

    /// The message text without the error code prefix.
    pub fn message(&self) -> String {
        match self {
            FileNameError::UnallowedCharacter { character, purpose } => {
                format!("Unallowed character ({character}) found in CPLEX {purpose} file")
            }
            FileNameError::SpaceDetected { purpose, .. } => {
                format!("Space detected in CPLEX {purpose} file")
            }
        }
    }
}

impl std::fmt::Display for FileNameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for FileNameError {}
