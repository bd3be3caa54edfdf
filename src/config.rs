#![forbid(unsafe_code)]

//! Configuration file parsing and validation
//!
//! An `argpeel.toml` lists the framework-reserved flags to peel off an argument
//! vector, and how output should be presented.

use crate::output::terminal::{FixedTerminal, StdoutTerminal, TerminalCapabilities};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "argpeel.toml";

/// Thread count used when `--threads` is absent
pub const DEFAULT_THREADS: i64 = 3;

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default = "default_flags")]
    pub flags: Vec<FlagSpec>,
}

/// Output presentation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorOption,
    #[serde(default)]
    pub format: OutputFormat,
}

/// When to style output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// The terminal capability provider matching this option
    pub fn terminal(self) -> Box<dyn TerminalCapabilities> {
        match self {
            ColorOption::Auto => Box::new(StdoutTerminal),
            ColorOption::Always => Box::new(FixedTerminal::color()),
            ColorOption::Never => Box::new(FixedTerminal::plain()),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Value type of a reserved flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    String,
    Bool,
    Int,
}

/// A reserved flag, named without its leading `--`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagSpec {
    pub name: String,
    pub kind: FlagKind,
    /// Fallback for absent `int` flags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<i64>,
}

impl FlagSpec {
    pub fn string(name: &str) -> Self {
        FlagSpec {
            name: name.to_string(),
            kind: FlagKind::String,
            default: None,
        }
    }

    pub fn bool(name: &str) -> Self {
        FlagSpec {
            name: name.to_string(),
            kind: FlagKind::Bool,
            default: None,
        }
    }

    pub fn int(name: &str, default: i64) -> Self {
        FlagSpec {
            name: name.to_string(),
            kind: FlagKind::Int,
            default: Some(default),
        }
    }
}

/// The reserved options a wrapping command line peels by default
fn default_flags() -> Vec<FlagSpec> {
    vec![
        FlagSpec::int("threads", DEFAULT_THREADS),
        FlagSpec::string("server-id"),
        FlagSpec::string("repo-path"),
        FlagSpec::string("watches"),
        FlagSpec::string("format"),
        FlagSpec::string("tag"),
        FlagSpec::bool("insecure-tls"),
        FlagSpec::bool("skip-login"),
        FlagSpec::bool("fail"),
        FlagSpec::bool("licenses"),
        FlagSpec::bool("detailed-summary"),
        FlagSpec::bool("scan"),
        FlagSpec::bool("run-native"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output: OutputConfig::default(),
            flags: default_flags(),
        }
    }
}

impl Config {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check flag names and defaults
    ///
    /// Names must be non-empty, unique, and given without leading dashes.
    /// Only `int` flags may carry a default.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for flag in &self.flags {
            if flag.name.trim().is_empty() {
                return Err(ConfigError::Invalid("flag name cannot be empty".to_string()));
            }
            if flag.name.starts_with('-') {
                return Err(ConfigError::Invalid(format!(
                    "flag '{}' must be named without leading dashes",
                    flag.name
                )));
            }
            if !seen.insert(flag.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "flag '{}' is listed more than once",
                    flag.name
                )));
            }
            if flag.default.is_some() && flag.kind != FlagKind::Int {
                return Err(ConfigError::Invalid(format!(
                    "flag '{}': only int flags can have a default",
                    flag.name
                )));
            }
        }

        Ok(())
    }
}
