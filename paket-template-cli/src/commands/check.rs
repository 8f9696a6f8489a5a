//! `check` command: validate every template below a directory.

use std::path::{Path, PathBuf};

use paket_template::config::ConfigFile;
use paket_template::template::{load_with, ParseOptions, TemplateError};
use tracing::info;

use super::common::{resolve_discovery, resolve_options};
use crate::error::CliError;

/// Outcome of checking a single template.
#[derive(Debug)]
pub struct CheckOutcome {
    pub path: PathBuf,
    pub result: Result<(), TemplateError>,
}

/// Load every path and collect per-file outcomes.
pub fn check_paths(paths: &[PathBuf], options: &ParseOptions) -> Vec<CheckOutcome> {
    paths
        .iter()
        .map(|path| CheckOutcome {
            path: path.clone(),
            result: load_with(path, options).map(|_| ()),
        })
        .collect()
}

fn report(outcome: &CheckOutcome, root: &Path) -> String {
    let shown = outcome.path.strip_prefix(root).unwrap_or(&outcome.path);
    match &outcome.result {
        Ok(()) => format!("ok     {}", shown.display()),
        Err(e) => format!("FAILED {}: {}", shown.display(), e),
    }
}

/// Check all templates below `root`, failing if any template fails.
pub fn run(
    config: &ConfigFile,
    root: PathBuf,
    suffix: Option<String>,
    strict: bool,
) -> Result<(), CliError> {
    let options = resolve_options(config, strict);
    let discovery = resolve_discovery(config, root, suffix);
    let paths = discovery.find_templates()?;
    info!(count = paths.len(), "Checking templates");

    let outcomes = check_paths(&paths, &options);
    for outcome in &outcomes {
        println!("{}", report(outcome, discovery.root()));
    }

    let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
    if failed > 0 {
        return Err(CliError::CheckFailed {
            failed,
            total: outcomes.len(),
        });
    }

    println!("{} templates ok", outcomes.len());
    Ok(())
}
