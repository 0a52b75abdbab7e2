//! Validation of file names placed on the CPLEX command line.

use crate::FileNameError;
use shell_solver::SolverVersion;
use tracing::{debug, trace};

/// Configuration for [`FileNameValidator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Directory separator the host uses.
    pub separator: char,
    /// First solver version that accepts quoted names containing spaces.
    pub quote_threshold: SolverVersion,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            separator: std::path::MAIN_SEPARATOR,
            quote_threshold: SolverVersion::QUOTED_PATHS,
        }
    }
}

impl ValidatorConfig {
    /// Create a configuration for the current host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate as if the host used `separator`.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the first version that accepts quoted names.
    pub fn with_quote_threshold(mut self, version: SolverVersion) -> Self {
        self.quote_threshold = version;
        self
    }

    /// The separator this host never produces.
    pub fn foreign_separator(&self) -> char {
        if self.separator == '\\' { '/' } else { '\\' }
    }
}

/// Checks file names before they are handed to the CPLEX shell.
///
/// A name is either returned as-is, wrapped in one pair of double quotes, or
/// rejected. Characters inside the name are never escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileNameValidator {
    config: ValidatorConfig,
}

impl FileNameValidator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate `path` for the solver at `version`.
    ///
    /// `purpose` names the file in error messages (`"log"`, `"solution"`).
    ///
    /// # Errors
    ///
    /// - [`FileNameError::UnallowedCharacter`] if the path contains the
    ///   foreign separator, at any version.
    /// - [`FileNameError::SpaceDetected`] if the path contains a space and
    ///   `version` is older than the quote threshold.
    pub fn validate(
        &self,
        version: SolverVersion,
        path: &str,
        purpose: &str,
    ) -> Result<String, FileNameError> {
        let foreign = self.config.foreign_separator();
        if path.contains(foreign) {
            debug!(
                component = "filename",
                operation = "validate",
                status = "error",
                purpose,
                %version,
                "Foreign path separator in file name"
            );
            return Err(FileNameError::UnallowedCharacter {
                character: foreign,
                purpose: purpose.to_string(),
            });
        }

        if !path.contains(' ') {
            trace!(
                component = "filename",
                operation = "validate",
                status = "success",
                purpose,
                "File name accepted unchanged"
            );
            return Ok(path.to_string());
        }

        if version < self.config.quote_threshold {
            debug!(
                component = "filename",
                operation = "validate",
                status = "error",
                purpose,
                %version,
                threshold = %self.config.quote_threshold,
                "Space in file name not supported by this solver version"
            );
            return Err(FileNameError::SpaceDetected {
                purpose: purpose.to_string(),
                version,
            });
        }

        debug!(
            component = "filename",
            operation = "validate",
            status = "success",
            purpose,
            %version,
            "Quoting file name containing spaces"
        );
        Ok(format!("\"{path}\""))
    }
}

/// Validate `path` with the default configuration for this host.
pub fn validate_file_name(
    version: SolverVersion,
    path: &str,
    purpose: &str,
) -> Result<String, FileNameError> {
    FileNameValidator::default().validate(version, path, purpose)
}
