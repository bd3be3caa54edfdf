//! CLI argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod logger;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, Command, OutputFormat};
pub use commands::{CliError, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE, render, run};
pub use logger::init_logger;
