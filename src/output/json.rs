#![forbid(unsafe_code)]

//! JSON output formatter for machine-readable output
//!
//! Reports are written as a single pretty-printed JSON document. No styling or
//! emoji handling applies here.

use crate::lookup::LookupReport;
use crate::peel::PeelReport;
use serde::Serialize;

/// JSON output formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JsonFormatter
    pub fn new() -> Self {
        JsonFormatter
    }

    /// Format a peel report
    ///
    /// The document has a `flags` object keyed by flag name, plus `present` (the
    /// names found in the arguments) and `clean_args`.
    pub fn format_peel(&self, report: &PeelReport) -> Result<String, serde_json::Error> {
        let flags: serde_json::Map<String, serde_json::Value> = report
            .values
            .iter()
            .map(|flag| serde_json::to_value(&flag.value).map(|value| (flag.name.clone(), value)))
            .collect::<Result<_, _>>()?;

        let present: Vec<&str> = report
            .values
            .iter()
            .filter(|flag| flag.present)
            .map(|flag| flag.name.as_str())
            .collect();

        let record = PeelRecord {
            flags,
            present,
            clean_args: &report.clean_args,
        };
        serde_json::to_string_pretty(&record)
    }

    /// Format the result of a single flag lookup
    pub fn format_lookup(&self, report: &LookupReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct PeelRecord<'a> {
    flags: serde_json::Map<String, serde_json::Value>,
    present: Vec<&'a str>,
    clean_args: &'a [String],
}
