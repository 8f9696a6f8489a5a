//! Optional package metadata.
//!
//! Every field here may be absent. Absence is never an error; only a
//! present-but-malformed value (a non-boolean `developmentDependency`, an
//! unparseable dependency requirement, a strict-mode `files` violation)
//! fails the parse.

use serde::Serialize;

use super::core::split_list;
use super::dependencies::{parse_dependencies, Dependency};
use super::error::{TemplateError, TemplateResult};
use super::extract::extract_field;
use super::files::{parse_files, FileMapping};
use super::options::ParseOptions;

/// Optional metadata shared by both template kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionalInfo {
    /// Human-friendly package title (`title`).
    pub title: Option<String>,

    /// Package owners, comma-separated in the template (`owners`).
    pub owners: Option<Vec<String>>,

    /// Release notes, usually a block (`releaseNotes`).
    pub release_notes: Option<String>,

    /// Short summary (`summary`).
    pub summary: Option<String>,

    /// Locale of the package, e.g. `en-US` (`language`).
    pub language: Option<String>,

    pub project_url: Option<String>,
    pub icon_url: Option<String>,
    pub license_url: Option<String>,
    pub copyright: Option<String>,

    /// Raw `requireLicenseAcceptance` text, passed through unchanged.
    pub require_license_acceptance: Option<String>,

    /// Tags, whitespace-separated in the template (`tags`).
    pub tags: Option<Vec<String>>,

    /// Whether the package is a development-only dependency
    /// (`developmentDependency`).
    pub development_dependency: Option<bool>,

    /// Package dependencies (`dependencies` block).
    pub dependencies: Option<Vec<Dependency>>,

    /// Files to copy into the package (`files` block).
    pub files: Option<Vec<FileMapping>>,
}

/// Parse a boolean flag value.
///
/// Accepts `true` and `false` in any letter case, ignoring surrounding
/// whitespace.
pub fn parse_flag(field: &'static str, value: &str) -> TemplateResult<bool> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(TemplateError::InvalidFlag {
            field,
            value: value.to_string(),
        })
    }
}

fn split_tags(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

impl OptionalInfo {
    /// Build from template lines.
    pub fn from_lines<L: AsRef<str>>(lines: &[L], options: &ParseOptions) -> TemplateResult<Self> {
        let field = |name: &str| extract_field(lines, name);

        let development_dependency = field("developmentDependency")
            .map(|v| parse_flag("developmentDependency", &v))
            .transpose()?;
        let dependencies = field("dependencies")
            .map(|block| parse_dependencies(&block))
            .transpose()?;
        let files = field("files")
            .map(|block| parse_files(&block, options))
            .transpose()?;

        Ok(Self {
            title: field("title"),
            owners: field("owners").map(|v| split_list(&v)),
            release_notes: field("releaseNotes"),
            summary: field("summary"),
            language: field("language"),
            project_url: field("projectUrl"),
            icon_url: field("iconUrl"),
            license_url: field("licenseUrl"),
            copyright: field("copyright"),
            require_license_acceptance: field("requireLicenseAcceptance"),
            tags: field("tags").map(|v| split_tags(&v)),
            development_dependency,
            dependencies,
            files,
        })
    }

    /// Whether no optional field is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
