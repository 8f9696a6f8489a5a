//! Error types for the CLI.

use std::fmt;

use paket_template::config::ConfigError;
use paket_template::template::TemplateError;

/// Errors surfaced by CLI commands.
#[derive(Debug)]
pub enum CliError {
    /// The configuration file could not be loaded.
    Config(ConfigError),

    /// A template could not be found, read or parsed.
    Template(TemplateError),

    /// Output could not be rendered.
    Output(String),

    /// One or more templates failed validation.
    CheckFailed { failed: usize, total: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::Template(e) => write!(f, "{}", e),
            CliError::Output(msg) => write!(f, "failed to render output: {}", msg),
            CliError::CheckFailed { failed, total } => {
                write!(f, "{} of {} templates failed to parse", failed, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Template(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<TemplateError> for CliError {
    fn from(e: TemplateError) -> Self {
        CliError::Template(e)
    }
}
