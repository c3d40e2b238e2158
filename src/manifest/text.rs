//! Line-oriented `version = "X.Y.Z"` replacement for Cargo.toml.
//!
//! The manifest is never re-serialized: only the bytes of the version value
//! on the first matching line change.

use std::ops::Range;
use std::sync::LazyLock;

use regex_lite::Regex;

static VERSION_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^(version\s*=\s*")([0-9.]+)(")"#).expect("Invalid regex")
});

/// Result of replacing the version line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub content: String,
    /// Version value that was on the replaced line.
    pub previous: String,
    /// Number of line-start version declarations found (only the first is replaced).
    pub occurrences: usize,
}

/// Current value of the first line-start version declaration.
pub fn current_version(content: &str) -> Option<&str> {
    VERSION_LINE_RE
        .captures(content)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Replace the value of the first line-start version declaration.
///
/// Returns `None` when no line matches. A line already carrying `version`
/// still counts as a match, so re-running with the same version is a no-op.
pub fn replace_version(content: &str, version: &str) -> Option<Replacement> {
    let (range, previous) = first_value(content)?;
    let occurrences = VERSION_LINE_RE.find_iter(content).count();

    let mut out = String::with_capacity(content.len() + version.len());
    out.push_str(&content[..range.start]);
    out.push_str(version);
    out.push_str(&content[range.end..]);

    Some(Replacement {
        content: out,
        previous,
        occurrences,
    })
}

/// `[package].version` as a TOML parser sees it, for cross-checking the line match.
pub fn package_version(content: &str) -> Option<String> {
    let doc = content.parse::<toml_edit::DocumentMut>().ok()?;
    doc.get("package")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(String::from)
}

fn first_value(content: &str) -> Option<(Range<usize>, String)> {
    let caps = VERSION_LINE_RE.captures(content)?;
    let value = caps.get(2)?;
    Some((value.range(), value.as_str().to_string()))
}
