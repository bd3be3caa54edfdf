#![forbid(unsafe_code)]

//! argpeel: locate and strip framework-reserved flags from raw argument vectors
//!
//! A command that wraps another tool often accepts a few options of its own
//! (`--threads`, `--server-id`, ...) mixed in with the wrapped tool's arguments.
//! argpeel finds those options by name, extracts their values, and hands back the
//! argument list without them so it can be forwarded untouched. It also offers
//! terminal-aware styling for the wrapping command's output.

pub mod cli;
pub mod config;
pub mod error;
pub mod flags;
pub mod lookup;
pub mod output;
pub mod peel;

pub use error::FlagError;
