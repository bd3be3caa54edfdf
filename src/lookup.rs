//! Single flag lookups reported in a serialisable form

use crate::error::FlagError;
use crate::flags::{find_boolean_flag, find_flag, remove_flag_from_command};
use serde::Serialize;

/// Where a flag was found and what it carried
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupReport {
    pub flag: String,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Arguments with the flag removed
    pub clean_args: Vec<String>,
}

/// Look up `flag` in `args`, as a boolean flag when `boolean` is set
pub fn lookup<S: AsRef<str>>(
    flag: &str,
    args: &[S],
    boolean: bool,
) -> Result<LookupReport, FlagError> {
    let (span, index, value_index, value) = if boolean {
        match find_boolean_flag(flag, args)? {
            Some(found) => (
                Some(found.span()),
                Some(found.index),
                Some(found.index),
                Some(found.value.to_string()),
            ),
            None => (None, None, None, None),
        }
    } else {
        match find_flag(flag, args)? {
            Some(found) => (
                Some(found.span()),
                Some(found.index),
                Some(found.value_index),
                Some(found.value),
            ),
            None => (None, None, None, None),
        }
    };

    Ok(LookupReport {
        flag: flag.to_string(),
        found: span.is_some(),
        index,
        value_index,
        value,
        clean_args: remove_flag_from_command(args, span),
    })
}
