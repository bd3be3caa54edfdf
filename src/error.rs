#![forbid(unsafe_code)]

//! Errors raised while extracting flag values from an argument vector

use std::num::ParseIntError;
use std::str::ParseBoolError;
use thiserror::Error;

/// Errors that can occur when a flag is present but its value is unusable
///
/// A flag that is simply absent is never an error; lookups report it as `None`.
#[derive(Debug, Error)]
pub enum FlagError {
    /// The flag was given in `--flag=` form with nothing after the `=`
    #[error("Flag {flag} is provided with empty value.")]
    EmptyValue { flag: String },

    /// The flag was the last token, or was followed by something that looks like another flag
    #[error("Failed extracting value of provided flag: {flag}.")]
    MissingValue { flag: String },

    /// The explicit value of a boolean flag is not a boolean literal
    #[error("Flag {flag} has invalid boolean value '{value}'")]
    InvalidBool {
        flag: String,
        value: String,
        #[source]
        source: ParseBoolError,
    },

    /// The value of a numeric flag is not an integer
    #[error("Flag {flag} has invalid integer value '{value}'")]
    InvalidInt {
        flag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FlagError {
    /// Name of the flag the error refers to
    pub fn flag(&self) -> &str {
        match self {
            FlagError::EmptyValue { flag }
            | FlagError::MissingValue { flag }
            | FlagError::InvalidBool { flag, .. }
            | FlagError::InvalidInt { flag, .. } => flag,
        }
    }
}
