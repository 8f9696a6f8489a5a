//! Template file types and parsing.
//!
//! # Format
//!
//! A template is a line-based document. The first line selects the kind:
//!
//! ```text
//! type file
//! id MyPackage
//! version 1.2.3
//! authors Alice, Bob
//! description
//!   A sample package
//!   spanning two lines.
//! dependencies
//!   FSharp.Core >= 4.0
//! files
//!   from src/**/*.fs
//!   to lib
//! ```
//!
//! - `type file` templates must declare `id`, `version`, `authors` and
//!   `description` ([`CompleteCoreInfo`]).
//! - `type project` templates may omit them; the values are inherited from
//!   the project file at pack time ([`ProjectCoreInfo`]).
//!
//! All other fields are optional ([`OptionalInfo`]). A field is either a
//! single `name value` line or a bare `name` header followed by indented
//! lines (see [`extract_field`]).
//!
//! # Pipeline
//!
//! ```text
//! lines ──► classify ──► CompleteCoreInfo | ProjectCoreInfo ──┐
//!                    └─► OptionalInfo ────────────────────────┴─► TemplateContents
//! ```
//!
//! Parsing is fail-fast: the first error aborts the parse.

mod core;
mod dependencies;
mod error;
mod extract;
mod files;
mod kind;
mod optional;
mod options;
mod parser;

pub use self::core::{CompleteCoreInfo, ProjectCoreInfo};
pub use dependencies::{parse_dependencies, Dependency, VersionRequirement};
pub use error::{TemplateError, TemplateResult};
pub use extract::{extract_block, extract_field, extract_single_line, BlockScanner, BlockState};
pub use files::{parse_files, FileMapping};
pub use kind::{classify, TemplateKind};
pub use optional::{parse_flag, OptionalInfo};
pub use options::ParseOptions;
pub use parser::{
    load, load_with, parse, parse_lines, parse_str, parse_str_with, parse_with, TemplateContents,
    TemplateFile,
};

// Re-export semver types for convenience
pub use semver::{Version, VersionReq};
