//! Common utilities shared across CLI commands.

use std::path::{Path, PathBuf};

use paket_template::config::ConfigFile;
use paket_template::discovery::TemplateDiscovery;
use paket_template::template::ParseOptions;

use crate::error::CliError;

/// Load config from an explicit path, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile, CliError> {
    let config = match path {
        Some(path) => ConfigFile::load_from(path)?,
        None => ConfigFile::load()?,
    };
    Ok(config)
}

/// Resolve parse options: `--strict` on the command line wins over config.
pub fn resolve_options(config: &ConfigFile, cli_strict: bool) -> ParseOptions {
    let options = config.parse_options();
    if cli_strict {
        options.with_strict_blocks(true)
    } else {
        options
    }
}

/// Resolve template discovery: `--suffix` on the command line wins over config.
pub fn resolve_discovery(
    config: &ConfigFile,
    root: PathBuf,
    cli_suffix: Option<String>,
) -> TemplateDiscovery {
    let discovery = config.discovery(root);
    match cli_suffix {
        Some(suffix) => discovery.with_suffix(suffix),
        None => discovery,
    }
}
