//! Field extraction from raw template lines.
//!
//! A field is written either on a single line:
//!
//! ```text
//! description A sample package
//! ```
//!
//! or as a block, with a bare header line followed by indented body lines:
//!
//! ```text
//! dependencies
//!   FSharp.Core >= 4.0
//!   Newtonsoft.Json
//! ```
//!
//! Field names are matched case-insensitively. The single-line form is
//! searched across the whole document first and the first matching line
//! wins; only when no line matches is the block form tried.

/// Find a field's value in either form.
///
/// Returns `None` when the field appears in neither form.
///
/// # Example
///
/// ```
/// use paket_template::template::extract_field;
///
/// let lines = ["id MyPackage", "tags", "  fsharp", "  json"];
///
/// assert_eq!(extract_field(&lines, "ID").as_deref(), Some("MyPackage"));
/// assert_eq!(extract_field(&lines, "tags").as_deref(), Some("fsharp\njson"));
/// assert_eq!(extract_field(&lines, "summary"), None);
/// ```
pub fn extract_field<L: AsRef<str>>(lines: &[L], name: &str) -> Option<String> {
    extract_single_line(lines, name).or_else(|| extract_block(lines, name))
}

/// Find the first `<name> <value>` line and return `<value>`.
///
/// Only the single space separating name and value is removed; the value
/// is otherwise returned as written. A line whose value is blank is a block
/// header with trailing whitespace, not a single-line field.
pub fn extract_single_line<L: AsRef<str>>(lines: &[L], name: &str) -> Option<String> {
    lines
        .iter()
        .find_map(|line| single_line_value(line.as_ref(), name))
        .map(str::to_string)
}

/// Find a block field and join its trimmed body lines with `\n`.
///
/// A header without any indented lines yields an empty string.
pub fn extract_block<L: AsRef<str>>(lines: &[L], name: &str) -> Option<String> {
    let mut scanner = BlockScanner::new(name);
    for line in lines {
        if !scanner.feed(line.as_ref()) {
            break;
        }
    }
    scanner.finish()
}

fn single_line_value<'a>(line: &'a str, name: &str) -> Option<&'a str> {
    let head = line.get(..name.len())?;
    if !head.eq_ignore_ascii_case(name) {
        return None;
    }
    let value = line[name.len()..].strip_prefix(' ')?;
    if value.trim().is_empty() {
        return None;
    }
    Some(value)
}

/// States of the block scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockState {
    /// Looking for the header line.
    Idle,
    /// Header seen, no body line yet.
    Header,
    /// At least one indented body line collected.
    Collecting,
    /// The block ended at a non-indented line.
    Done,
}

/// Line-at-a-time scanner for a single block field.
///
/// Feed lines in document order until [`feed`](Self::feed) returns
/// `false`, then call [`finish`](Self::finish).
///
/// # Example
///
/// ```
/// use paket_template::template::{BlockScanner, BlockState};
///
/// let mut scanner = BlockScanner::new("files");
/// assert!(scanner.feed("id Foo"));
/// assert!(scanner.feed("FILES"));
/// assert_eq!(scanner.state(), BlockState::Header);
/// assert!(scanner.feed("    from bin"));
/// assert!(scanner.feed("    to lib"));
/// assert!(!scanner.feed("summary Foo"));
/// assert_eq!(scanner.finish().as_deref(), Some("from bin\nto lib"));
/// ```
#[derive(Debug)]
pub struct BlockScanner<'n> {
    name: &'n str,
    state: BlockState,
    body: Vec<String>,
}

impl<'n> BlockScanner<'n> {
    /// Create a scanner looking for the block header `name`.
    pub fn new(name: &'n str) -> Self {
        Self {
            name,
            state: BlockState::Idle,
            body: Vec::new(),
        }
    }

    /// Current scan state.
    pub fn state(&self) -> BlockState {
        self.state
    }

    /// Consume one line. Returns `false` once the block is complete.
    pub fn feed(&mut self, line: &str) -> bool {
        self.state = match self.state {
            BlockState::Idle if line.trim().eq_ignore_ascii_case(self.name) => BlockState::Header,
            BlockState::Idle => BlockState::Idle,
            BlockState::Header | BlockState::Collecting if line.starts_with(' ') => {
                self.body.push(line.trim().to_string());
                BlockState::Collecting
            }
            BlockState::Header | BlockState::Collecting | BlockState::Done => BlockState::Done,
        };
        self.state != BlockState::Done
    }

    /// The joined block body, or `None` if the header was never seen.
    pub fn finish(self) -> Option<String> {
        match self.state {
            BlockState::Idle => None,
            _ => Some(self.body.join("\n")),
        }
    }
}
