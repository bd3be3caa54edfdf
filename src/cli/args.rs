//! Command-line argument definitions

use crate::config;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Peel framework-reserved flags off a raw argument vector
#[derive(Debug, Parser)]
#[command(name = "argpeel", version, about)]
pub struct Cli {
    /// When to use colors and emoji (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorChoice>,

    /// Report format (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Path to the config file [default: ./argpeel.toml when present]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract every reserved flag and print the values and remaining arguments
    Peel {
        /// Arguments to inspect, given after `--`
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Look up a single flag
    Find {
        /// Flag name without its leading dashes, e.g. `server-id`
        flag: String,

        /// Treat the flag as boolean (`--flag` or `--flag=<bool>`)
        #[arg(long = "bool")]
        boolean: bool,

        /// Arguments to inspect, given after `--`
        #[arg(last = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Json => config::OutputFormat::Json,
        }
    }
}
