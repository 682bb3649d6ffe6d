use crate::diagnostics::{DiagnosticSink, Token};
use crate::error::RequestError;
use crate::request::Requirement;
use std::fmt;
use std::str::FromStr;

/// Tool version that first accepted a feature option for `required`.
pub const FEATURE_OPTION_SINCE: Version = Version::new(0, 1, 0);

const FEATURE_OPTION_NAME: &str = "Passing \"feature\" option to find_installation";

/// Three-part release number, ordered component-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = RequestError;

    /// Parse `major.minor[.patch]`, ignoring a leading `>=`/`v` and any
    /// non-numeric suffix on each component ("3.0-rc1" is 3.0.0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RequestError::InvalidVersion(s.to_string());
        let cleaned = s.trim().trim_start_matches(['>', '=', 'v']).trim();

        let numeric = |part: &str| -> Option<u32> {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse().ok()
        };

        let mut parts = cleaned.split('.');
        let major = parts.next().and_then(numeric).ok_or_else(invalid)?;
        let minor = parts.next().and_then(numeric).ok_or_else(invalid)?;
        let patch = match parts.next() {
            Some(p) => numeric(p).ok_or_else(invalid)?,
            None => 0,
        };
        Ok(Self::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Warns when a request uses a capability newer than the project targets.
///
/// Only affects diagnostics; resolution proceeds the same either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureGate {
    project_version: Option<Version>,
}

impl FeatureGate {
    /// `project_version` is the oldest tool release the project targets;
    /// `None` disables the warning.
    pub fn new(project_version: Option<Version>) -> Self {
        Self { project_version }
    }

    /// Emit one `[WARN]` line when `requirement` is a feature option and
    /// the project targets a release older than [`FEATURE_OPTION_SINCE`].
    pub fn check(&self, requirement: &Requirement, sink: &dyn DiagnosticSink) {
        if !requirement.is_feature() {
            return;
        }
        let Some(project) = self.project_version else {
            return;
        };
        if project < FEATURE_OPTION_SINCE {
            sink.emit(&[
                Token::Warn("[WARN]".into()),
                Token::Plain(format!(
                    "Project targets {project} but uses feature introduced in {FEATURE_OPTION_SINCE}:"
                )),
                Token::Plain(format!("{FEATURE_OPTION_NAME}.")),
            ]);
        }
    }
}
