//! Integration tests for template parsing.
//!
//! These tests exercise the full flow from files on disk:
//! - discovery → load → typed contents
//! - both template kinds with realistic content
//! - fail-fast error reporting
//!
//! Run with: `cargo test --test template_parsing`

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use paket_template::discovery::find_template_files;
use paket_template::template::{
    load, load_with, parse_str, FileMapping, ParseOptions, TemplateContents, TemplateError,
    TemplateKind, Version,
};

// ============================================================================
// Fixtures
// ============================================================================

const FULL_FILE_TEMPLATE: &str = "\
type file
id Contoso.Json
version 3.1.0-beta.2
authors Contoso Ltd, Jane Doe
owners Contoso Ltd
title Contoso JSON
summary Fast JSON for .NET
description
  A JSON library.
  Supports streaming.
projectUrl https://contoso.example/json
iconUrl https://contoso.example/icon.png
licenseUrl https://contoso.example/license
copyright Copyright 2024 Contoso
requireLicenseAcceptance false
language en-US
tags json serialization
developmentDependency false
releaseNotes
  - Streaming reader
  - Fewer allocations
dependencies
  FSharp.Core >= 4.0
  System.Memory
files
  from bin/Release/Contoso.Json.dll
  to lib/net45
  from README.md
  to .
";

const PROJECT_TEMPLATE: &str = "\
type project
version 2.0.0
dependencies
  Newtonsoft.Json =9.0.1
";

fn write(root: &Path, relative: &str, content: &str) -> std::path::PathBuf {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_full_file_template() {
    let contents = parse_str(FULL_FILE_TEMPLATE).unwrap();

    let (core, optional) = match contents {
        TemplateContents::Complete { core, optional } => (core, optional),
        other => panic!("expected a file template, got {:?}", other),
    };

    assert_eq!(core.id, "Contoso.Json");
    assert_eq!(core.version, Version::parse("3.1.0-beta.2").unwrap());
    assert_eq!(core.authors, vec!["Contoso Ltd", "Jane Doe"]);
    assert_eq!(core.description, "A JSON library.\nSupports streaming.");

    assert_eq!(optional.owners, Some(vec!["Contoso Ltd".to_string()]));
    assert_eq!(optional.title.as_deref(), Some("Contoso JSON"));
    assert_eq!(optional.summary.as_deref(), Some("Fast JSON for .NET"));
    assert_eq!(optional.language.as_deref(), Some("en-US"));
    assert_eq!(
        optional.release_notes.as_deref(),
        Some("- Streaming reader\n- Fewer allocations")
    );
    assert_eq!(optional.require_license_acceptance.as_deref(), Some("false"));
    assert_eq!(optional.development_dependency, Some(false));
    assert_eq!(
        optional.tags,
        Some(vec!["json".to_string(), "serialization".to_string()])
    );

    let deps = optional.dependencies.unwrap();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps[0].id, "FSharp.Core");
    assert!(deps[0].requirement.matches(&Version::new(4, 0, 0)));
    assert_eq!(deps[1].id, "System.Memory");
    assert!(deps[1].requirement.is_any());

    assert_eq!(
        optional.files,
        Some(vec![
            FileMapping::new("bin/Release/Contoso.Json.dll", "lib/net45"),
            FileMapping::new("README.md", "."),
        ])
    );
}

#[test]
fn test_field_order_does_not_matter() {
    let text = "type file\ndescription D\nauthors A\nversion 1.0.0\nid Foo\n";
    let contents = parse_str(text).unwrap();

    assert_eq!(contents.id(), Some("Foo"));
    assert_eq!(contents.version(), Some(&Version::new(1, 0, 0)));
}

#[test]
fn test_project_template_inherits_missing_fields() {
    let contents = parse_str(PROJECT_TEMPLATE).unwrap();

    assert_eq!(contents.kind(), TemplateKind::Project);
    assert_eq!(contents.id(), None);
    assert_eq!(contents.authors(), None);
    assert_eq!(contents.description(), None);
    assert_eq!(contents.version(), Some(&Version::new(2, 0, 0)));

    let deps = contents.optional().dependencies.as_ref().unwrap();
    assert!(deps[0].requirement.matches(&Version::new(9, 0, 1)));
    assert!(!deps[0].requirement.matches(&Version::new(9, 0, 2)));
}

#[test]
fn test_discover_and_load_all() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "src/Json/paket.template", FULL_FILE_TEMPLATE);
    write(temp.path(), "src/Tool/Tool.paket.template", PROJECT_TEMPLATE);
    write(temp.path(), "src/Tool/Tool.fsproj", "<Project />");

    let paths = find_template_files(temp.path()).unwrap();
    assert_eq!(paths.len(), 2);

    let templates: Vec<_> = paths.iter().map(|p| load(p).unwrap()).collect();

    assert_eq!(templates[0].path, temp.path().join("src/Json/paket.template"));
    assert_eq!(templates[0].contents.kind(), TemplateKind::File);
    assert_eq!(templates[1].contents.kind(), TemplateKind::Project);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("paket.template");

    match load(&path) {
        Err(TemplateError::ReadFailed { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ReadFailed, got {:?}", other),
    }
}

#[test]
fn test_load_reports_first_error_only() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        "paket.template",
        "type file\nversion 1.0.0\ndevelopmentDependency perhaps\n",
    );

    let err = load(&path).unwrap_err();
    assert_eq!(err.to_string(), "no id field given");
}

#[test]
fn test_load_strict_mode() {
    let temp = TempDir::new().unwrap();
    let path = write(
        temp.path(),
        "paket.template",
        "type project\nfiles\n  from bin/*.dll\n  to lib\n  from orphan\n",
    );

    let lenient = load(&path).unwrap();
    assert_eq!(
        lenient.contents.optional().files.as_ref().map(Vec::len),
        Some(1)
    );

    let strict = ParseOptions::new().with_strict_blocks(true);
    assert!(matches!(
        load_with(&path, &strict),
        Err(TemplateError::MalformedBlock { .. })
    ));
}

#[test]
fn test_contents_serialize_to_json() {
    let contents = parse_str("type project\nid Foo\ntags a b\n").unwrap();
    let json = serde_json::to_value(&contents).unwrap();

    assert_eq!(json["type"], "project");
    assert_eq!(json["core"]["id"], "Foo");
    assert!(json["core"]["version"].is_null());
    assert_eq!(json["optional"]["tags"][1], "b");
}
