#![forbid(unsafe_code)]

//! Peeling a set of reserved flags off an argument vector
//!
//! Each configured flag is extracted in order from the clean output of the
//! previous extraction, so the final argument list has every reserved flag
//! removed and can be forwarded to the wrapped tool as is.

use crate::config::{FlagKind, FlagSpec};
use crate::error::FlagError;
use crate::flags::{extract_bool_option, extract_int_option, extract_string_option};
use serde::Serialize;

/// Value of a peeled flag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PeeledValue {
    Str(String),
    Bool(bool),
    Int(i64),
}

impl std::fmt::Display for PeeledValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeeledValue::Str(value) => write!(f, "{}", value),
            PeeledValue::Bool(value) => write!(f, "{}", value),
            PeeledValue::Int(value) => write!(f, "{}", value),
        }
    }
}

/// A single reserved flag after peeling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeeledFlag {
    /// Flag name without leading dashes
    pub name: String,
    pub value: PeeledValue,
    /// Whether the flag appeared in the arguments
    pub present: bool,
}

/// Outcome of peeling all reserved flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeelReport {
    /// One entry per reserved flag, in configuration order
    pub values: Vec<PeeledFlag>,
    /// Arguments left for the wrapped tool
    pub clean_args: Vec<String>,
}

impl PeelReport {
    /// Look up a peeled value by flag name
    pub fn get(&self, name: &str) -> Option<&PeeledValue> {
        self.values
            .iter()
            .find(|flag| flag.name == name)
            .map(|flag| &flag.value)
    }
}

/// Extract every flag in `specs` from `args`
///
/// # Errors
///
/// Returns the first [`FlagError`] encountered; nothing is peeled in that case.
pub fn peel<S: AsRef<str>>(args: &[S], specs: &[FlagSpec]) -> Result<PeelReport, FlagError> {
    let mut clean_args: Vec<String> = args.iter().map(|arg| arg.as_ref().to_string()).collect();
    let mut values = Vec::with_capacity(specs.len());

    for spec in specs {
        let before = clean_args.len();

        let (next_args, value) = match spec.kind {
            FlagKind::String => {
                let extracted = extract_string_option(&clean_args, &spec.name)?;
                (extracted.clean_args, PeeledValue::Str(extracted.value))
            }
            FlagKind::Bool => {
                let extracted = extract_bool_option(&clean_args, &spec.name)?;
                (extracted.clean_args, PeeledValue::Bool(extracted.value))
            }
            FlagKind::Int => {
                let default = spec.default.unwrap_or_default();
                let extracted = extract_int_option(&clean_args, &spec.name, default)?;
                (extracted.clean_args, PeeledValue::Int(extracted.value))
            }
        };

        let present = next_args.len() < before;
        clean_args = next_args;
        values.push(PeeledFlag {
            name: spec.name.clone(),
            value,
            present,
        });
    }

    log::info!(
        "peeled {} of {} reserved flags, {} arguments remain",
        values.iter().filter(|flag| flag.present).count(),
        specs.len(),
        clean_args.len()
    );

    Ok(PeelReport { values, clean_args })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_peel_default_flags() {
        let args = [
            "upload",
            "--threads=8",
            "--server-id",
            "prod",
            "--fail=false",
            "--insecure-tls",
            "a.zip",
            "repo/",
        ];
        let report = peel(&args, &Config::default().flags).unwrap();

        assert_eq!(report.clean_args, vec!["upload", "a.zip", "repo/"]);
        assert_eq!(report.get("threads"), Some(&PeeledValue::Int(8)));
        assert_eq!(
            report.get("server-id"),
            Some(&PeeledValue::Str("prod".to_string()))
        );
        assert_eq!(report.get("fail"), Some(&PeeledValue::Bool(false)));
        assert_eq!(report.get("insecure-tls"), Some(&PeeledValue::Bool(true)));
        assert_eq!(report.get("tag"), Some(&PeeledValue::Str(String::new())));
        assert_eq!(report.get("missing"), None);
    }

    #[test]
    fn test_peel_reports_presence() {
        let specs = [FlagSpec::bool("fail"), FlagSpec::int("threads", 3)];
        let report = peel(&["--fail=false", "x"], &specs).unwrap();

        assert!(report.values[0].present);
        assert_eq!(report.values[0].value, PeeledValue::Bool(false));
        assert!(!report.values[1].present);
        assert_eq!(report.values[1].value, PeeledValue::Int(3));
    }

    #[test]
    fn test_peel_keeps_order_of_remaining_args() {
        let specs = [FlagSpec::string("tag"), FlagSpec::bool("scan")];
        let report = peel(&["a", "--scan", "b", "--tag", "v1", "c"], &specs).unwrap();
        assert_eq!(report.clean_args, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_peel_stops_on_first_error() {
        let specs = [FlagSpec::string("tag"), FlagSpec::int("threads", 3)];
        let err = peel(&["--tag", "v1", "--threads=lots"], &specs).unwrap_err();
        assert_eq!(err.flag(), "--threads");
    }

    #[test]
    fn test_peel_without_specs() {
        let report = peel(&["a", "--b"], &[]).unwrap();
        assert!(report.values.is_empty());
        assert_eq!(report.clean_args, vec!["a", "--b"]);
    }

    #[test]
    fn test_peeled_value_display() {
        assert_eq!(PeeledValue::Int(4).to_string(), "4");
        assert_eq!(PeeledValue::Bool(true).to_string(), "true");
        assert_eq!(PeeledValue::Str("x".to_string()).to_string(), "x");
    }
}
