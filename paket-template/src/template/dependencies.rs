//! Dependency block parsing.
//!
//! Each non-blank line of a `dependencies` block names a package followed
//! by an optional version requirement:
//!
//! ```text
//! dependencies
//!   FSharp.Core >= 4.0
//!   Newtonsoft.Json ~7.0
//!   Argu
//! ```

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use semver::{Version, VersionReq};
use serde::Serialize;

use super::error::{TemplateError, TemplateResult};

/// A parsed version requirement, keeping the text it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRequirement {
    /// Requirement text as written in the template (may be empty).
    pub text: String,

    /// Parsed requirement. Empty text parses to `*`.
    pub req: VersionReq,
}

impl VersionRequirement {
    /// A requirement accepting any version.
    pub fn any() -> Self {
        Self {
            text: String::new(),
            req: VersionReq::STAR,
        }
    }

    /// Parse requirement text.
    ///
    /// Empty text means "any version".
    pub fn parse(text: &str) -> Result<Self, semver::Error> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::any());
        }
        Ok(Self {
            text: text.to_string(),
            req: VersionReq::parse(text)?,
        })
    }

    /// Check whether a version satisfies this requirement.
    pub fn matches(&self, version: &Version) -> bool {
        self.req.matches(version)
    }

    /// Whether this requirement accepts any version.
    pub fn is_any(&self) -> bool {
        self.req == VersionReq::STAR
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.req)
    }
}

/// A package dependency declared in a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    /// Package identifier.
    pub id: String,

    /// Accepted versions.
    pub requirement: VersionRequirement,
}

impl Dependency {
    /// Create a dependency.
    pub fn new(id: impl Into<String>, requirement: VersionRequirement) -> Self {
        Self {
            id: id.into(),
            requirement,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requirement.is_any() {
            write!(f, "{}", self.id)
        } else {
            write!(f, "{} {}", self.id, self.requirement)
        }
    }
}

/// Pattern for a dependency line: identifier, then requirement text.
fn dependency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        // (\S+) - package identifier (leading non-whitespace run)
        // (.*)  - requirement text, trimmed by the caller
        Regex::new(r"^(\S+)(.*)$").expect("dependency pattern is valid")
    })
}

/// Split a dependency line into identifier and requirement text.
///
/// Lines that don't fit the pattern yield the whole line as identifier and
/// an empty requirement.
fn split_dependency_line(line: &str) -> (&str, &str) {
    match dependency_pattern().captures(line) {
        Some(captures) => {
            let id = captures.get(1).map_or(line, |m| m.as_str());
            let rest = captures.get(2).map_or("", |m| m.as_str());
            (id, rest.trim())
        }
        None => (line, ""),
    }
}

/// Parse the body of a `dependencies` block.
///
/// Blank lines are skipped. Duplicate identifiers are kept as written.
pub fn parse_dependencies(block: &str) -> TemplateResult<Vec<Dependency>> {
    block
        .split('\n')
        .map(str::trim)
        // Blank lines name no package (DESIGN.md, decision 10).
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (id, text) = split_dependency_line(line);
            VersionRequirement::parse(text)
                .map(|requirement| Dependency::new(id, requirement))
                .map_err(|source| TemplateError::InvalidRequirement {
                    dependency: id.to_string(),
                    text: text.to_string(),
                    source,
                })
        })
        .collect()
}
