//! Error types for solver metadata parsing.

/// Error returned when a version string cannot be read as a [`SolverVersion`].
///
/// [`SolverVersion`]: crate::SolverVersion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionParseError {
    /// The input was empty or only whitespace.
    Empty,
    /// A component was not a non-negative integer.
    InvalidComponent(String),
    /// More than four dot-separated components were given.
    TooManyComponents(usize),
}

impl VersionParseError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            VersionParseError::Empty => "VERSION_EMPTY",
            VersionParseError::InvalidComponent(_) => "VERSION_INVALID_COMPONENT",
            VersionParseError::TooManyComponents(_) => "VERSION_TOO_MANY_COMPONENTS",
        }
    }
}

impl std::fmt::Display for VersionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionParseError::Empty => write!(f, "[{}] Version string is empty", self.code()),
            VersionParseError::InvalidComponent(part) => {
                write!(
                    f,
                    "[{}] Version component '{}' is not a number",
                    self.code(),
                    part
                )
            }
            VersionParseError::TooManyComponents(count) => {
                write!(
                    f,
                    "[{}] Expected at most 4 version components, found {}",
                    self.code(),
                    count
                )
            }
        }
    }
}

impl std::error::Error for VersionParseError {}
