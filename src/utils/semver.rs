use crate::error::ModpackError;
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Which component of a [`Version`] to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Patch,
    Minor,
    Major,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a dot-separated version. Missing trailing components default to 0.
    ///
    /// ### Parameters
    /// - `text`: The version string, e.g. `1.4.2`, `1.4` or `1`
    ///
    pub fn parse(text: &str) -> Result<Version, ModpackError> {
        let trimmed = text.trim();
        let segments: Vec<&str> = trimmed.split('.').collect();
        if segments.len() > 3 {
            return Err(ModpackError::Format(format!(
                "Invalid version '{}': expected at most three components (major.minor.patch)",
                trimmed
            )));
        }

        let mut parts = [0u64; 3];
        for (slot, segment) in parts.iter_mut().zip(segments.iter()) {
            *slot = segment.parse::<u64>().map_err(|_| {
                ModpackError::Format(format!(
                    "Invalid version '{}': '{}' is not a non-negative integer",
                    trimmed, segment
                ))
            })?;
        }

        Ok(Version::new(parts[0], parts[1], parts[2]))
    }

    /// Returns the next version for the given bump, resetting lower components.
    pub fn bump(&self, kind: BumpKind) -> Version {
        match kind {
            BumpKind::Major => Version::new(self.major.saturating_add(1), 0, 0),
            BumpKind::Minor => Version::new(self.major, self.minor.saturating_add(1), 0),
            BumpKind::Patch => Version::new(self.major, self.minor, self.patch.saturating_add(1)),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = ModpackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl BumpKind {
    pub fn label(&self) -> &'static str {
        match self {
            BumpKind::Patch => "patch",
            BumpKind::Minor => "minor",
            BumpKind::Major => "major",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
