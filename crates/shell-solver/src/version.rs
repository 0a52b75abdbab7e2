//! Solver version triple.

use crate::VersionParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Version reported by a solver binary, compared component by component.
///
/// The derived ordering is lexicographic over `(major, minor, patch)`, which
/// is what version gates need: `12.10.0` sorts after `12.9.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolverVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SolverVersion {
    /// First CPLEX release that accepts quoted file names with spaces.
    pub const QUOTED_PATHS: SolverVersion = SolverVersion::new(12, 7, 0);

    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The version as a plain tuple.
    pub fn as_tuple(self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch)
    }
}

impl From<(u32, u32, u32)> for SolverVersion {
    fn from((major, minor, patch): (u32, u32, u32)) -> Self {
        Self::new(major, minor, patch)
    }
}

impl std::fmt::Display for SolverVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for SolverVersion {
    type Err = VersionParseError;

    /// Parse `major[.minor[.patch[.fixpack]]]`. The fix pack component that
    /// solver banners print (`12.8.0.0`) is accepted and dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionParseError::Empty);
        }

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > 4 {
            return Err(VersionParseError::TooManyComponents(parts.len()));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(parts.iter()) {
            *slot = part
                .parse()
                .map_err(|_| VersionParseError::InvalidComponent((*part).to_string()))?;
        }
        if let Some(fix_pack) = parts.get(3) {
            fix_pack
                .parse::<u32>()
                .map_err(|_| VersionParseError::InvalidComponent((*fix_pack).to_string()))?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}
