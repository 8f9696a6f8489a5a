//! `show` command: parse one template and print it.

use std::fmt::{self, Write as _};
use std::path::Path;

use paket_template::config::ConfigFile;
use paket_template::template::{load_with, OptionalInfo, TemplateFile};

use super::common::resolve_options;
use crate::error::CliError;

/// Value printed for absent fields.
const INHERITED: &str = "(inherited)";

/// Load `file` and print it as a summary or as JSON.
///
/// Any load error aborts the command.
pub fn run(config: &ConfigFile, file: &Path, json: bool, strict: bool) -> Result<(), CliError> {
    let options = resolve_options(config, strict);
    let template = load_with(file, &options)?;

    let output = if json {
        serde_json::to_string_pretty(&template).map_err(|e| CliError::Output(e.to_string()))?
    } else {
        render_summary(&template)
    };

    println!("{}", output);
    Ok(())
}

/// Render a human-readable summary of a parsed template.
pub fn render_summary(template: &TemplateFile) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_summary(&mut out, template);
    out.trim_end().to_string()
}

fn write_summary(out: &mut String, template: &TemplateFile) -> fmt::Result {
    let contents = &template.contents;
    let version = contents.version().map(|v| v.to_string());
    let authors = contents.authors().map(|a| a.join(", "));
    let description = contents.description().map(|d| d.replace('\n', " "));

    writeln!(out, "{}", template.path.display())?;
    writeln!(out, "  type:         {}", contents.kind())?;
    writeln!(out, "  id:           {}", contents.id().unwrap_or(INHERITED))?;
    writeln!(out, "  version:      {}", version.as_deref().unwrap_or(INHERITED))?;
    writeln!(out, "  authors:      {}", authors.as_deref().unwrap_or(INHERITED))?;
    writeln!(out, "  description:  {}", description.as_deref().unwrap_or(INHERITED))?;

    write_optional(out, contents.optional())
}

fn write_optional(out: &mut String, optional: &OptionalInfo) -> fmt::Result {
    let singles = [
        ("title", &optional.title),
        ("summary", &optional.summary),
        ("language", &optional.language),
        ("projectUrl", &optional.project_url),
        ("iconUrl", &optional.icon_url),
        ("licenseUrl", &optional.license_url),
        ("copyright", &optional.copyright),
        ("requireLicenseAcceptance", &optional.require_license_acceptance),
    ];
    for (name, value) in singles {
        if let Some(value) = value {
            writeln!(out, "  {}: {}", name, value)?;
        }
    }

    if let Some(owners) = &optional.owners {
        writeln!(out, "  owners: {}", owners.join(", "))?;
    }
    if let Some(tags) = &optional.tags {
        writeln!(out, "  tags: {}", tags.join(" "))?;
    }
    if let Some(dev) = optional.development_dependency {
        writeln!(out, "  developmentDependency: {}", dev)?;
    }
    if let Some(notes) = &optional.release_notes {
        writeln!(out, "  releaseNotes:")?;
        for line in notes.lines() {
            writeln!(out, "    {}", line)?;
        }
    }
    if let Some(deps) = &optional.dependencies {
        writeln!(out, "  dependencies:")?;
        for dep in deps {
            writeln!(out, "    {}", dep)?;
        }
    }
    if let Some(files) = &optional.files {
        writeln!(out, "  files:")?;
        for mapping in files {
            writeln!(out, "    {} -> {}", mapping.source, mapping.destination)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use paket_template::template::parse_str;

    #[test]
    fn test_render_file_template() {
        let contents = parse_str(
            "type file\nid Foo\nversion 1.2.3\nauthors A, B\ndescription D\ndependencies\n  Bar >=2.0.0\nfiles\n  from src\n  to lib\n",
        )
        .unwrap();
        let summary = render_summary(&TemplateFile::new("paket.template", contents));

        assert!(summary.starts_with("paket.template\n"));
        assert!(summary.contains("  type:         file"));
        assert!(summary.contains("  id:           Foo"));
        assert!(summary.contains("  authors:      A, B"));
        assert!(summary.contains("    Bar >=2.0.0"));
        assert!(summary.contains("    src -> lib"));
    }

    #[test]
    fn test_render_project_template_marks_inherited() {
        let contents = parse_str("type project\nversion 2.0.0\ntags x y\n").unwrap();
        let summary = render_summary(&TemplateFile::new("p/paket.template", contents));

        assert!(summary.contains("  id:           (inherited)"));
        assert!(summary.contains("  version:      2.0.0"));
        assert!(summary.contains("  tags: x y"));
        assert!(!summary.contains("dependencies"));
    }

    #[test]
    fn test_render_multi_line_fields() {
        let contents = parse_str(
            "type project\nowners A, B\nreleaseNotes\n  first\n  second\ndevelopmentDependency true\n",
        )
        .unwrap();
        let summary = render_summary(&TemplateFile::new("paket.template", contents));

        assert!(summary.contains("  owners: A, B"));
        assert!(summary.contains("  releaseNotes:\n    first\n    second"));
        assert!(summary.contains("  developmentDependency: true"));
        assert!(!summary.ends_with('\n'));
    }
}
