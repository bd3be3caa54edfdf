#![forbid(unsafe_code)]

//! Locating flags inside a raw argument vector
//!
//! A token is a *candidate* for a flag when it starts with the flag name. A candidate
//! can still turn out to be a different flag sharing the prefix (`--server-id-extra`
//! while looking for `--server-id`), in which case the scan moves on to the next token.

use crate::error::FlagError;

/// Location and value of a string-valued flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagMatch {
    /// Index of the flag token
    pub index: usize,
    /// Index of the token holding the value; equal to `index` for `--flag=value`
    pub value_index: usize,
    /// The flag value
    pub value: String,
}

impl FlagMatch {
    /// The inclusive span of tokens occupied by the flag and its value
    pub fn span(&self) -> FlagSpan {
        FlagSpan {
            start: self.index,
            end: self.value_index,
        }
    }
}

/// Location and value of a boolean flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolFlagMatch {
    /// Index of the flag token
    pub index: usize,
    /// The flag value; a bare `--flag` is `true`
    pub value: bool,
}

impl BoolFlagMatch {
    /// Boolean flags always live in a single token
    pub fn span(&self) -> FlagSpan {
        FlagSpan {
            start: self.index,
            end: self.index,
        }
    }
}

/// Inclusive range of argument indices `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagSpan {
    pub start: usize,
    pub end: usize,
}

/// Outcome of resolving a single candidate token
#[derive(Debug, PartialEq, Eq)]
enum Resolution {
    Found { value: String, value_index: usize },
    NotThisFlag,
}

/// Find the value of a string-valued flag
///
/// Accepts both `--flag=value` and `--flag value`. Returns `Ok(None)` when the flag
/// does not appear at all.
///
/// # Errors
///
/// Returns an error if the flag exists but its value cannot be extracted:
/// - `--flag=` with an empty value
/// - `--flag` as the last token
/// - `--flag` followed by a token starting with `-`
pub fn find_flag<S: AsRef<str>>(
    flag_name: &str,
    args: &[S],
) -> Result<Option<FlagMatch>, FlagError> {
    for (index, arg) in args.iter().enumerate() {
        if !arg.as_ref().starts_with(flag_name) {
            continue;
        }

        match resolve_value(flag_name, args, index)? {
            Resolution::Found { value, value_index } => {
                log::debug!("found {} at {} (value at {})", flag_name, index, value_index);
                return Ok(Some(FlagMatch {
                    index,
                    value_index,
                    value,
                }));
            }
            Resolution::NotThisFlag => {
                log::trace!("skipping {} while looking for {}", arg.as_ref(), flag_name);
            }
        }
    }

    Ok(None)
}

/// Resolve the value of the candidate token at `index`
///
/// The value either follows `=` in the same token or is the next token.
fn resolve_value<S: AsRef<str>>(
    flag_name: &str,
    args: &[S],
    index: usize,
) -> Result<Resolution, FlagError> {
    let rest = args[index]
        .as_ref()
        .strip_prefix(flag_name)
        .unwrap_or_default();

    // --key=value
    if let Some(value) = rest.strip_prefix('=') {
        if value.is_empty() {
            return Err(FlagError::EmptyValue {
                flag: flag_name.to_string(),
            });
        }
        return Ok(Resolution::Found {
            value: value.to_string(),
            value_index: index,
        });
    }

    // A different flag with the same prefix, e.g. --server-id-another
    if !rest.is_empty() {
        return Ok(Resolution::NotThisFlag);
    }

    match args.get(index + 1).map(|next| next.as_ref()) {
        Some(next) if !next.starts_with('-') => Ok(Resolution::Found {
            value: next.to_string(),
            value_index: index + 1,
        }),
        _ => Err(FlagError::MissingValue {
            flag: flag_name.to_string(),
        }),
    }
}

/// Find a boolean flag
///
/// Boolean flags come in two forms:
/// 1. `--flag`, meaning `true`
/// 2. `--flag=value`, where value is a boolean literal
///
/// # Errors
///
/// Returns an error if the flag is given an explicit value that is not a boolean literal.
pub fn find_boolean_flag<S: AsRef<str>>(
    flag_name: &str,
    args: &[S],
) -> Result<Option<BoolFlagMatch>, FlagError> {
    for (index, arg) in args.iter().enumerate() {
        let Some(rest) = arg.as_ref().strip_prefix(flag_name) else {
            continue;
        };

        let value = if rest.is_empty() {
            true
        } else if let Some(literal) = rest.strip_prefix('=') {
            parse_bool_literal(flag_name, literal)?
        } else {
            log::trace!("skipping {} while looking for {}", rest, flag_name);
            continue;
        };

        log::debug!("found {}={} at {}", flag_name, value, index);
        return Ok(Some(BoolFlagMatch { index, value }));
    }

    Ok(None)
}

/// Parse a boolean literal the way command-line tools conventionally accept them
fn parse_bool_literal(flag_name: &str, literal: &str) -> Result<bool, FlagError> {
    match literal {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => other
            .parse::<bool>()
            .map_err(|source| FlagError::InvalidBool {
                flag: flag_name.to_string(),
                value: other.to_string(),
                source,
            }),
    }
}

/// Find the first of several flag names present in `args`
///
/// Names are tried in the given order; the first one found, or the first error,
/// ends the search.
pub fn find_flag_first_match<N, S>(
    flag_names: &[N],
    args: &[S],
) -> Result<Option<FlagMatch>, FlagError>
where
    N: AsRef<str>,
    S: AsRef<str>,
{
    for name in flag_names {
        if let Some(found) = find_flag(name.as_ref(), args)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
