//! Template type discriminant.

use std::fmt;

use serde::Serialize;

use super::error::{TemplateError, TemplateResult};
use super::extract::extract_single_line;

/// The two template variants, selected by the first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// `type file`: all required metadata is in the template.
    File,
    /// `type project`: required metadata may be inherited from the project.
    Project,
}

impl TemplateKind {
    /// The keyword used on the `type` line.
    pub fn keyword(&self) -> &'static str {
        match self {
            TemplateKind::File => "file",
            TemplateKind::Project => "project",
        }
    }

    /// Parse a `type` value (case-insensitive, surrounding whitespace ignored).
    pub fn from_keyword(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("file") {
            Some(TemplateKind::File)
        } else if value.eq_ignore_ascii_case("project") {
            Some(TemplateKind::Project)
        } else {
            None
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classify a template by its first line.
///
/// Only the first line is inspected; a `type` declaration further down the
/// document does not count.
pub fn classify<L: AsRef<str>>(lines: &[L]) -> TemplateResult<TemplateKind> {
    let first = lines.first().ok_or(TemplateError::MissingType)?;
    let value =
        extract_single_line(std::slice::from_ref(first), "type").ok_or(TemplateError::MissingType)?;

    TemplateKind::from_keyword(&value).ok_or(TemplateError::UnknownType(value))
}
