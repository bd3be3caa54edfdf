//! Command dispatch for the `argpeel` binary
//!
//! Each command resolves the configuration, runs the library operation and
//! prints the report in the requested format. Errors are reported on stderr and
//! mapped to an exit code.

use super::args::{Cli, Command};
use crate::config::{CONFIG_FILE_NAME, Config, ConfigError, OutputFormat};
use crate::error::FlagError;
use crate::lookup::{LookupReport, lookup};
use crate::output::{HumanFormatter, JsonFormatter};
use crate::peel::{PeelReport, peel};
use std::path::Path;
use thiserror::Error;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Errors surfaced by the command line
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Exit code for this error; malformed inspected arguments count as usage errors
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Flag(_) => EXIT_USAGE,
            CliError::Config(_) | CliError::Json(_) => EXIT_ERROR,
        }
    }
}

/// Run the parsed command line, printing the report to stdout
///
/// Returns the process exit code.
pub fn run(cli: &Cli) -> i32 {
    match render(cli) {
        Ok(output) => {
            print!("{}", output);
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            e.exit_code()
        }
    }
}

/// Run the command and return the formatted report
pub fn render(cli: &Cli) -> Result<String, CliError> {
    let mut config = resolve_config(cli.config.as_deref())?;
    if let Some(color) = cli.color {
        config.output.color = color.into();
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    match &cli.command {
        Command::Peel { args } => {
            let report = peel(args, &config.flags)?;
            format_peel(&config, &report)
        }
        Command::Find {
            flag,
            boolean,
            args,
        } => {
            let report = lookup(&long_flag_name(flag), args, *boolean)?;
            format_lookup(&config, &report)
        }
    }
}

/// Load the explicit config file, else `./argpeel.toml` when present, else defaults
fn resolve_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return Config::load(path);
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.is_file() {
        log::debug!("loading config from {}", local.display());
        return Config::load(local);
    }

    log::debug!("no config file, using built-in reserved flags");
    Ok(Config::default())
}

fn long_flag_name(flag: &str) -> String {
    if flag.starts_with('-') {
        flag.to_string()
    } else {
        format!("--{}", flag)
    }
}

fn format_peel(config: &Config, report: &PeelReport) -> Result<String, CliError> {
    match config.output.format {
        OutputFormat::Human => {
            Ok(HumanFormatter::new(config.output.color.terminal()).format_peel(report))
        }
        OutputFormat::Json => Ok(JsonFormatter::new().format_peel(report)? + "\n"),
    }
}

fn format_lookup(config: &Config, report: &LookupReport) -> Result<String, CliError> {
    match config.output.format {
        OutputFormat::Human => {
            Ok(HumanFormatter::new(config.output.color.terminal()).format_lookup(report))
        }
        OutputFormat::Json => Ok(JsonFormatter::new().format_lookup(report)? + "\n"),
    }
}
