//! User configuration file.
//!
//! Settings are read from `config.ini` in the platform config directory
//! (`~/.config/paket-template/config.ini` on Linux):
//!
//! ```ini
//! [parser]
//! strict_blocks = false
//!
//! [discovery]
//! file_suffix = paket.template
//! ```
//!
//! A missing file yields the defaults. Unknown keys are ignored.

use std::fmt;
use std::path::{Path, PathBuf};

use ini::Ini;

use crate::discovery::{TemplateDiscovery, TEMPLATE_SUFFIX};
use crate::template::ParseOptions;

/// Configuration file name.
pub const CONFIG_FILENAME: &str = "config.ini";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "paket-template";

/// Errors that can occur while loading the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file exists but could not be read or is not valid INI.
    LoadFailed { path: PathBuf, reason: String },

    /// A key holds a value of the wrong shape.
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "failed to load config {}: {}", path.display(), reason)
            }
            ConfigError::InvalidValue {
                section,
                key,
                value,
            } => {
                write!(f, "invalid value '{}' for [{}] {}", value, section, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// `[parser]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserSettings {
    /// Reject malformed block lines instead of dropping them.
    pub strict_blocks: bool,
}

/// `[discovery]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    /// File name suffix identifying template files.
    pub file_suffix: String,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            file_suffix: TEMPLATE_SUFFIX.to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    pub parser: ParserSettings,
    pub discovery: DiscoverySettings,
}

impl ConfigFile {
    /// Default location of the configuration file, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
    }

    /// Load from the default location.
    ///
    /// Returns defaults when there is no config directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_ini(&ini)
    }

    /// Parse configuration from INI text.
    pub fn from_ini_str(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content).map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("<string>"),
            reason: e.to_string(),
        })?;

        Self::from_ini(&ini)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("parser")) {
            if let Some(value) = section.get("strict_blocks") {
                config.parser.strict_blocks = parse_bool("parser", "strict_blocks", value)?;
            }
        }

        if let Some(section) = ini.section(Some("discovery")) {
            if let Some(value) = section.get("file_suffix") {
                let value = value.trim();
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        section: "discovery",
                        key: "file_suffix",
                        value: value.to_string(),
                    });
                }
                config.discovery.file_suffix = value.to_string();
            }
        }

        Ok(config)
    }

    /// Parser options derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().with_strict_blocks(self.parser.strict_blocks)
    }

    /// A discovery rooted at `root` using the configured suffix.
    pub fn discovery(&self, root: impl Into<PathBuf>) -> TemplateDiscovery {
        TemplateDiscovery::new(root).with_suffix(self.discovery.file_suffix.clone())
    }
}

fn parse_bool(section: &'static str, key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            section,
            key,
            value: value.to_string(),
        }),
    }
}
