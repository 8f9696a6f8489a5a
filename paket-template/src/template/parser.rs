//! Template parsing pipeline.
//!
//! The input is read in full into a line sequence, classified by its first
//! line, then handed to the matching core builder and to the optional
//! builder. The first error from any stage is returned; no partial result
//! is produced.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use semver::Version;
use serde::Serialize;
use tracing::debug;

use super::core::{CompleteCoreInfo, ProjectCoreInfo};
use super::error::{TemplateError, TemplateResult};
use super::kind::{classify, TemplateKind};
use super::optional::OptionalInfo;
use super::options::ParseOptions;

/// Placeholder path reported for read failures on anonymous streams.
const STREAM_PATH: &str = "<stream>";

/// UTF-8 byte-order mark, written by some editors at the start of a file.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parsed contents of a template, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TemplateContents {
    /// A `type file` template with all core fields present.
    #[serde(rename = "file")]
    Complete {
        core: CompleteCoreInfo,
        optional: OptionalInfo,
    },

    /// A `type project` template whose core fields may be inherited.
    #[serde(rename = "project")]
    Project {
        core: ProjectCoreInfo,
        optional: OptionalInfo,
    },
}

impl TemplateContents {
    /// The template kind.
    pub fn kind(&self) -> TemplateKind {
        match self {
            TemplateContents::Complete { .. } => TemplateKind::File,
            TemplateContents::Project { .. } => TemplateKind::Project,
        }
    }

    /// Package id, if declared.
    pub fn id(&self) -> Option<&str> {
        match self {
            TemplateContents::Complete { core, .. } => Some(&core.id),
            TemplateContents::Project { core, .. } => core.id.as_deref(),
        }
    }

    /// Package version, if declared.
    pub fn version(&self) -> Option<&Version> {
        match self {
            TemplateContents::Complete { core, .. } => Some(&core.version),
            TemplateContents::Project { core, .. } => core.version.as_ref(),
        }
    }

    /// Package authors, if declared.
    pub fn authors(&self) -> Option<&[String]> {
        match self {
            TemplateContents::Complete { core, .. } => Some(&core.authors),
            TemplateContents::Project { core, .. } => core.authors.as_deref(),
        }
    }

    /// Package description, if declared.
    pub fn description(&self) -> Option<&str> {
        match self {
            TemplateContents::Complete { core, .. } => Some(&core.description),
            TemplateContents::Project { core, .. } => core.description.as_deref(),
        }
    }

    /// Optional metadata.
    pub fn optional(&self) -> &OptionalInfo {
        match self {
            TemplateContents::Complete { optional, .. }
            | TemplateContents::Project { optional, .. } => optional,
        }
    }
}

/// A parsed template together with the file it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateFile {
    /// Path of the template file.
    pub path: PathBuf,

    /// Parsed contents.
    pub contents: TemplateContents,
}

impl TemplateFile {
    /// Pair parsed contents with their source path.
    pub fn new(path: impl Into<PathBuf>, contents: TemplateContents) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }
}

/// Parse already materialized template lines.
pub fn parse_lines<L: AsRef<str>>(
    lines: &[L],
    options: &ParseOptions,
) -> TemplateResult<TemplateContents> {
    let kind = classify(lines)?;
    debug!(%kind, lines = lines.len(), "Classified template");

    let contents = match kind {
        TemplateKind::File => {
            let core = CompleteCoreInfo::from_lines(lines)?;
            let optional = OptionalInfo::from_lines(lines, options)?;
            TemplateContents::Complete { core, optional }
        }
        TemplateKind::Project => {
            let core = ProjectCoreInfo::from_lines(lines)?;
            let optional = OptionalInfo::from_lines(lines, options)?;
            TemplateContents::Project { core, optional }
        }
    };

    Ok(contents)
}

/// Parse template text with default options.
///
/// # Example
///
/// ```
/// use paket_template::template::{parse_str, TemplateKind};
///
/// let contents = parse_str("type project\nversion 2.0.0\n").unwrap();
/// assert_eq!(contents.kind(), TemplateKind::Project);
/// assert_eq!(contents.id(), None);
/// assert_eq!(contents.version().map(|v| v.to_string()).as_deref(), Some("2.0.0"));
/// ```
pub fn parse_str(text: &str) -> TemplateResult<TemplateContents> {
    parse_str_with(text, &ParseOptions::default())
}

/// Parse template text.
pub fn parse_str_with(text: &str, options: &ParseOptions) -> TemplateResult<TemplateContents> {
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, options)
}

/// Parse a template from a byte stream with default options.
///
/// The stream is read to the end before parsing starts.
pub fn parse<R: Read>(reader: R) -> TemplateResult<TemplateContents> {
    parse_with(reader, &ParseOptions::default())
}

/// Parse a template from a byte stream.
pub fn parse_with<R: Read>(reader: R, options: &ParseOptions) -> TemplateResult<TemplateContents> {
    let lines = read_lines(reader)?;
    parse_lines(&lines, options)
}

fn read_lines<R: Read>(reader: R) -> TemplateResult<Vec<String>> {
    let mut lines = BufReader::new(reader)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| TemplateError::ReadFailed {
            path: PathBuf::from(STREAM_PATH),
            source,
        })?;

    if let Some(first) = lines.first_mut() {
        if first.starts_with(BYTE_ORDER_MARK) {
            first.remove(0);
        }
    }
    Ok(lines)
}

/// Load and parse a template file with default options.
///
/// A load error means the template cannot be packed; callers are expected
/// to abort the operation that needed it rather than continue with partial
/// data.
pub fn load(path: impl AsRef<Path>) -> TemplateResult<TemplateFile> {
    load_with(path, &ParseOptions::default())
}

/// Load and parse a template file.
pub fn load_with(path: impl AsRef<Path>, options: &ParseOptions) -> TemplateResult<TemplateFile> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TemplateError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    let contents = parse_with(file, options).map_err(|e| e.with_path(path))?;
    debug!(path = %path.display(), kind = %contents.kind(), "Loaded template");

    Ok(TemplateFile::new(path, contents))
}
