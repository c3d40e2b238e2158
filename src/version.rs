//! Release version validation.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex_lite::Regex;

use crate::error::BumpError;

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("Invalid regex"));

/// A validated `X.Y.Z` release version.
///
/// The text is kept exactly as given; no semver normalisation or ordering
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion(String);

impl ReleaseVersion {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ReleaseVersion {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if VERSION_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(BumpError::InvalidVersion(s.to_string()))
        }
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
