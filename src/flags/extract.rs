#![forbid(unsafe_code)]

//! Typed extraction of framework options
//!
//! Each extractor looks up one `--<option>` flag, returns its value coerced to the
//! target type, and a copy of the arguments with the flag removed. The caller's
//! arguments are never modified.

use super::locator::{find_boolean_flag, find_flag};
use super::remover::remove_flag_from_command;
use crate::error::FlagError;
use std::num::ParseIntError;
use std::str::FromStr;

/// Result of extracting a single option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted<T> {
    /// Arguments with the option removed
    pub clean_args: Vec<String>,
    /// The option value, or its default when absent
    pub value: T,
}

fn long_flag(option_name: &str) -> String {
    format!("--{}", option_name)
}

/// Extract `--<option_name>` as a string; empty when absent
pub fn extract_string_option<S: AsRef<str>>(
    args: &[S],
    option_name: &str,
) -> Result<Extracted<String>, FlagError> {
    let found = find_flag(&long_flag(option_name), args)?;
    let clean_args = remove_flag_from_command(args, found.as_ref().map(|f| f.span()));

    Ok(Extracted {
        clean_args,
        value: found.map(|f| f.value).unwrap_or_default(),
    })
}

/// Extract `--<option_name>` as a boolean; `false` when absent
pub fn extract_bool_option<S: AsRef<str>>(
    args: &[S],
    option_name: &str,
) -> Result<Extracted<bool>, FlagError> {
    let found = find_boolean_flag(&long_flag(option_name), args)?;
    let clean_args = remove_flag_from_command(args, found.map(|f| f.span()));

    Ok(Extracted {
        clean_args,
        value: found.is_some_and(|f| f.value),
    })
}

/// Extract `--<option_name>` as an integer, falling back to `default` when absent
///
/// An empty value (`--threads ""`) also falls back to `default`; the flag and its
/// empty value are still removed.
///
/// # Errors
///
/// Returns [`FlagError::InvalidInt`] when the value is present but not a number.
pub fn extract_int_option<S, T>(
    args: &[S],
    option_name: &str,
    default: T,
) -> Result<Extracted<T>, FlagError>
where
    S: AsRef<str>,
    T: FromStr<Err = ParseIntError>,
{
    let flag = long_flag(option_name);
    let found = find_flag(&flag, args)?;
    let clean_args = remove_flag_from_command(args, found.as_ref().map(|f| f.span()));

    let value = match found {
        Some(found) if !found.value.is_empty() => found
            .value
            .parse::<T>()
            .map_err(|source| FlagError::InvalidInt {
                flag,
                value: found.value.clone(),
                source,
            })?,
        _ => default,
    };

    Ok(Extracted { clean_args, value })
}

/// `--threads <n>`
pub fn extract_threads<S: AsRef<str>>(
    args: &[S],
    default: i64,
) -> Result<Extracted<i64>, FlagError> {
    extract_int_option(args, "threads", default)
}

/// `--server-id <id>`
pub fn extract_server_id<S: AsRef<str>>(args: &[S]) -> Result<Extracted<String>, FlagError> {
    extract_string_option(args, "server-id")
}

/// `--repo-path <path>`
pub fn extract_repo_path<S: AsRef<str>>(args: &[S]) -> Result<Extracted<String>, FlagError> {
    extract_string_option(args, "repo-path")
}

/// `--watches <list>`
pub fn extract_watches<S: AsRef<str>>(args: &[S]) -> Result<Extracted<String>, FlagError> {
    extract_string_option(args, "watches")
}

/// `--format <format>`
pub fn extract_format<S: AsRef<str>>(args: &[S]) -> Result<Extracted<String>, FlagError> {
    extract_string_option(args, "format")
}

/// `--tag <tag>`
pub fn extract_tag<S: AsRef<str>>(args: &[S]) -> Result<Extracted<String>, FlagError> {
    extract_string_option(args, "tag")
}

/// `--insecure-tls`
pub fn extract_insecure_tls<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "insecure-tls")
}

/// `--skip-login`
pub fn extract_skip_login<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "skip-login")
}

/// `--fail`
pub fn extract_fail<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "fail")
}

/// `--licenses`
pub fn extract_licenses<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "licenses")
}

/// `--detailed-summary`
pub fn extract_detailed_summary<S: AsRef<str>>(
    args: &[S],
) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "detailed-summary")
}

/// `--scan`, requesting a scan as part of the wrapped command
pub fn extract_scan<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "scan")
}

/// `--run-native`
pub fn extract_run_native<S: AsRef<str>>(args: &[S]) -> Result<Extracted<bool>, FlagError> {
    extract_bool_option(args, "run-native")
}
