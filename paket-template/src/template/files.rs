//! File mapping block parsing.
//!
//! A `files` block lists copy instructions as `from`/`to` line pairs:
//!
//! ```text
//! files
//!   from bin/Release/*.dll
//!   to lib/net45
//!   from README.md
//!   to .
//! ```

use serde::Serialize;
use tracing::debug;

use super::error::{TemplateError, TemplateResult};
use super::options::ParseOptions;

const FROM_PREFIX: &str = "from ";
const TO_PREFIX: &str = "to ";

/// A source glob or path and where it is placed inside the package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMapping {
    /// Source path or glob, relative to the template.
    pub source: String,

    /// Destination directory inside the package.
    pub destination: String,
}

impl FileMapping {
    /// Create a file mapping.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Parse the body of a `files` block.
///
/// Blank lines are ignored. Lines that break the `from`/`to` cadence (a
/// `from` without a following `to`, a stray `to`, or any other text) are
/// dropped, unless [`ParseOptions::strict_blocks`] is set, in which case the
/// first such line is an error.
pub fn parse_files(block: &str, options: &ParseOptions) -> TemplateResult<Vec<FileMapping>> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut mappings = Vec::new();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index];
        let pair = line.strip_prefix(FROM_PREFIX).and_then(|source| {
            lines
                .get(index + 1)
                .and_then(|next| next.strip_prefix(TO_PREFIX))
                .map(|destination| FileMapping::new(source, destination))
        });

        match pair {
            Some(mapping) => {
                mappings.push(mapping);
                index += 2;
            }
            None if options.strict_blocks => {
                return Err(TemplateError::MalformedBlock {
                    field: "files",
                    line: line.to_string(),
                });
            }
            None => {
                debug!(line, "Dropping unpaired line in files block");
                index += 1;
            }
        }
    }

    Ok(mappings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient() -> ParseOptions {
        ParseOptions::default()
    }

    fn strict() -> ParseOptions {
        ParseOptions::default().with_strict_blocks(true)
    }

    #[test]
    fn test_single_mapping() {
        let files = parse_files("from src/**/*.fs\nto lib", &lenient()).unwrap();
        assert_eq!(files, vec![FileMapping::new("src/**/*.fs", "lib")]);
    }

    #[test]
    fn test_multiple_mappings_in_order() {
        let files = parse_files("from a\nto x\nfrom b\nto y", &lenient()).unwrap();
        assert_eq!(
            files,
            vec![FileMapping::new("a", "x"), FileMapping::new("b", "y")]
        );
    }

    #[test]
    fn test_trailing_unpaired_from_is_dropped() {
        let files = parse_files("from src/**/*.fs\nto lib\nfrom orphan", &lenient()).unwrap();
        assert_eq!(files, vec![FileMapping::new("src/**/*.fs", "lib")]);
    }

    #[test]
    fn test_from_followed_by_from_drops_first() {
        let files = parse_files("from a\nfrom b\nto y", &lenient()).unwrap();
        assert_eq!(files, vec![FileMapping::new("b", "y")]);
    }

    #[test]
    fn test_stray_lines_are_dropped() {
        let files = parse_files("to nowhere\nnoise\nfrom a\nto x", &lenient()).unwrap();
        assert_eq!(files, vec![FileMapping::new("a", "x")]);
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let files = parse_files("from a\n\nto x\n", &lenient()).unwrap();
        assert_eq!(files, vec![FileMapping::new("a", "x")]);
    }

    #[test]
    fn test_empty_block() {
        assert!(parse_files("", &lenient()).unwrap().is_empty());
        assert!(parse_files("", &strict()).unwrap().is_empty());
    }

    #[test]
    fn test_strict_rejects_unpaired_from() {
        match parse_files("from a\nto x\nfrom orphan", &strict()) {
            Err(TemplateError::MalformedBlock { field, line }) => {
                assert_eq!(field, "files");
                assert_eq!(line, "from orphan");
            }
            other => panic!("expected MalformedBlock, got {:?}", other),
        }
    }

    #[test]
    fn test_strict_accepts_well_formed_block() {
        let files = parse_files("from a\nto x", &strict()).unwrap();
        assert_eq!(files.len(), 1);
    }
}
