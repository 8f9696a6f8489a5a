//! paket-template - Parser for `paket.template` package template files
//!
//! This library turns the line-based template format used to drive package
//! creation into typed values. The [`template`] module holds the parser,
//! [`discovery`] finds template files on disk, and [`config`] loads the
//! user configuration that tunes both.
//!
//! # Example
//!
//! ```
//! use paket_template::template::{parse_str, TemplateContents};
//!
//! let contents = parse_str("type file\nid MyPackage\nversion 1.2.3\nauthors Alice, Bob\ndescription A sample package\n").unwrap();
//!
//! match contents {
//!     TemplateContents::Complete { core, .. } => {
//!         assert_eq!(core.id, "MyPackage");
//!         assert_eq!(core.authors, vec!["Alice", "Bob"]);
//!     }
//!     TemplateContents::Project { .. } => unreachable!(),
//! }
//! ```

pub mod config;
pub mod discovery;
pub mod template;
