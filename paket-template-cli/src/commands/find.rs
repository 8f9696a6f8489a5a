//! `find` command: list template files.

use std::path::PathBuf;

use paket_template::config::ConfigFile;

use super::common::resolve_discovery;
use crate::error::CliError;

/// Print every template file below `root`, one per line.
pub fn run(config: &ConfigFile, root: PathBuf, suffix: Option<String>) -> Result<(), CliError> {
    let discovery = resolve_discovery(config, root, suffix);

    for path in discovery.find_templates()? {
        println!("{}", path.display());
    }

    Ok(())
}
