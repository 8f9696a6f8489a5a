//! Core package metadata: id, version, authors and description.
//!
//! `type file` templates must carry all four fields ([`CompleteCoreInfo`]);
//! `type project` templates may omit any of them because the values are
//! inherited from the project at pack time ([`ProjectCoreInfo`]).

use semver::Version;
use serde::Serialize;

use super::error::{TemplateError, TemplateResult};
use super::extract::extract_field;

/// Core metadata of a `type file` template. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteCoreInfo {
    /// Package identifier. Never empty.
    pub id: String,

    /// Package version.
    pub version: Version,

    /// Package authors, in declaration order.
    pub authors: Vec<String>,

    /// Package description.
    pub description: String,
}

/// Core metadata of a `type project` template. Absent fields are inherited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectCoreInfo {
    pub id: Option<String>,
    pub version: Option<Version>,
    pub authors: Option<Vec<String>>,
    pub description: Option<String>,
}

/// Split a comma-separated list, trimming each entry.
///
/// Empty entries are kept.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse version text with the semantic version parser.
pub(crate) fn parse_version(text: &str) -> TemplateResult<Version> {
    Version::parse(text).map_err(|source| TemplateError::InvalidVersion {
        text: text.to_string(),
        source,
    })
}

fn require<L: AsRef<str>>(lines: &[L], name: &'static str) -> TemplateResult<String> {
    extract_field(lines, name).ok_or(TemplateError::MissingField(name))
}

impl CompleteCoreInfo {
    /// Build from template lines.
    ///
    /// Fields are read in order (id, version, authors, description) and the
    /// first missing one is reported.
    pub fn from_lines<L: AsRef<str>>(lines: &[L]) -> TemplateResult<Self> {
        let id = require(lines, "id")?;
        if id.is_empty() {
            return Err(TemplateError::MissingField("id"));
        }
        let version = parse_version(&require(lines, "version")?)?;
        let authors = split_list(&require(lines, "authors")?);
        let description = require(lines, "description")?;

        Ok(Self {
            id,
            version,
            authors,
            description,
        })
    }
}

impl ProjectCoreInfo {
    /// Build from template lines.
    ///
    /// Absent fields stay `None`. A version that is present but malformed
    /// is still an error.
    pub fn from_lines<L: AsRef<str>>(lines: &[L]) -> TemplateResult<Self> {
        let version = extract_field(lines, "version")
            .map(|text| parse_version(&text))
            .transpose()?;

        Ok(Self {
            id: extract_field(lines, "id"),
            version,
            authors: extract_field(lines, "authors").map(|a| split_list(&a)),
            description: extract_field(lines, "description"),
        })
    }
}
