//! Error types for template parsing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while reading, classifying or parsing a template.
///
/// Parsing is fail-fast: the first error encountered aborts the parse and
/// no partial result is produced.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The first line does not declare a `type`, or the document is empty.
    #[error("template must start with a 'type file' or 'type project' line")]
    MissingType,

    /// The first line declares a type other than `file` or `project`.
    #[error("unknown template type '{0}', expected 'file' or 'project'")]
    UnknownType(String),

    /// A field required by `type file` templates is absent.
    #[error("no {0} field given")]
    MissingField(&'static str),

    /// The `version` field is not a valid semantic version.
    #[error("invalid version '{text}': {source}")]
    InvalidVersion {
        text: String,
        #[source]
        source: semver::Error,
    },

    /// A dependency line carries an unparseable version requirement.
    #[error("invalid version requirement '{text}' for dependency {dependency}: {source}")]
    InvalidRequirement {
        dependency: String,
        text: String,
        #[source]
        source: semver::Error,
    },

    /// A boolean field holds something other than `true` or `false`.
    #[error("invalid value '{value}' for {field}, expected 'true' or 'false'")]
    InvalidFlag { field: &'static str, value: String },

    /// A line inside a block does not fit the block's grammar (strict mode).
    #[error("malformed line in {field} block: '{line}'")]
    MalformedBlock { field: &'static str, line: String },

    /// Failed to read a template file or its stream.
    #[error("failed to read {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A discovery pattern could not be built or walked.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

impl TemplateError {
    /// Attach a path to a read failure raised from an anonymous stream.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::ReadFailed { source, .. } => Self::ReadFailed {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
