#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use super::style::Formatter;
use super::terminal::TerminalCapabilities;
use crate::lookup::LookupReport;
use crate::peel::PeelReport;

/// Human-readable output formatter
///
/// Formats reports for terminal display. Styling and emoji are only kept when the
/// terminal supports them.
pub struct HumanFormatter<T> {
    formatter: Formatter<T>,
}

impl<T: TerminalCapabilities> HumanFormatter<T> {
    /// Creates a new HumanFormatter backed by the given terminal
    pub fn new(terminal: T) -> Self {
        HumanFormatter {
            formatter: Formatter::new(terminal),
        }
    }

    /// Format a peel report
    ///
    /// Lists each reserved flag with its value, followed by the arguments left
    /// for the wrapped tool.
    pub fn format_peel(&self, report: &PeelReport) -> String {
        let f = &self.formatter;
        let mut output = String::new();

        push_line(&mut output, &f.bold_title("Reserved flags 🧹"));
        output.push('\n');

        if report.values.is_empty() {
            push_line(&mut output, &format!("  {}", f.comment("(none configured)")));
        }

        let width = report
            .values
            .iter()
            .map(|flag| flag.name.len())
            .max()
            .unwrap_or(0);

        for flag in &report.values {
            let name = format!("--{:<width$}", flag.name, width = width);
            let value = if flag.present {
                self.value(&flag.value.to_string())
            } else {
                format!(
                    "{} {}",
                    self.value(&flag.value.to_string()),
                    f.comment("(not set)")
                )
            };
            push_line(&mut output, &format!("  {}  {}", f.bold(&name), value));
        }

        output.push('\n');
        push_line(&mut output, &f.bold_title("Forwarded arguments 📦"));
        output.push('\n');

        if report.clean_args.is_empty() {
            push_line(&mut output, &format!("  {}", f.comment("(none)")));
        } else {
            let joined = report
                .clean_args
                .iter()
                .map(|arg| quote_arg(arg))
                .collect::<Vec<_>>()
                .join(" ");
            push_line(&mut output, &format!("  {}", joined));
        }

        output
    }

    /// Format the result of a single flag lookup
    pub fn format_lookup(&self, report: &LookupReport) -> String {
        let f = &self.formatter;
        let mut output = String::new();

        match (report.index, report.value_index, report.value.as_deref()) {
            (Some(index), Some(value_index), Some(value)) => {
                let position = if index == value_index {
                    format!("argument {}", index)
                } else {
                    format!("arguments {}..={}", index, value_index)
                };
                let line = format!(
                    "{} {} at {}: {}",
                    f.green("✅"),
                    f.bold(&report.flag),
                    position,
                    self.value(value)
                );
                push_line(&mut output, line.trim_start());
            }
            _ => {
                let line = format!(
                    "{} {} {}",
                    f.yellow("🔍"),
                    f.bold(&report.flag),
                    f.comment("not found")
                );
                push_line(&mut output, line.trim_start());
            }
        }

        output
    }

    /// Render a flag value as given, quoted when ambiguous
    ///
    /// Values are user input, so emoji in them are never stripped.
    fn value(&self, text: &str) -> String {
        let quoted = quote_arg(text);
        if self.formatter.terminal().supports_styling() {
            self.formatter.green(&quoted)
        } else {
            quoted
        }
    }
}

/// Push a line, dropping trailing whitespace left behind by stripped emoji
fn push_line(output: &mut String, line: &str) {
    output.push_str(line.trim_end());
    output.push('\n');
}

/// Quote arguments that would otherwise be ambiguous when joined by spaces
fn quote_arg(arg: &str) -> String {
    if arg.is_empty() || arg.chars().any(char::is_whitespace) {
        format!("{:?}", arg)
    } else {
        arg.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FlagSpec;
    use crate::lookup::lookup;
    use crate::output::terminal::FixedTerminal;
    use crate::peel::peel;

    fn sample_report() -> PeelReport {
        let specs = [
            FlagSpec::int("threads", 3),
            FlagSpec::string("server-id"),
            FlagSpec::bool("fail"),
        ];
        peel(&["upload", "--server-id=prod", "my file.zip"], &specs).unwrap()
    }

    #[test]
    fn test_format_peel_plain() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());
        let output = formatter.format_peel(&sample_report());

        assert!(output.starts_with("Reserved flags\n"));
        assert!(output.contains("--threads    3 (not set)"));
        assert!(output.contains("--server-id  prod"));
        assert!(output.contains("--fail       false (not set)"));
        assert!(output.contains("Forwarded arguments\n"));
        assert!(output.contains("  upload \"my file.zip\"\n"));
        assert!(!output.contains('\x1b'));
        assert!(!output.contains("🧹"));
    }

    #[test]
    fn test_format_peel_color_keeps_emoji() {
        let formatter = HumanFormatter::new(FixedTerminal::color());
        let output = formatter.format_peel(&sample_report());

        assert!(output.contains("🧹"));
        assert!(output.contains("📦"));
        assert!(output.contains('\x1b'));
    }

    #[test]
    fn test_format_peel_empty() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());
        let report = peel::<&str>(&[], &[]).unwrap();
        let output = formatter.format_peel(&report);

        assert!(output.contains("(none configured)"));
        assert!(output.contains("(none)"));
    }

    #[test]
    fn test_format_lookup_found() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());

        let report = lookup("--tag", &["push", "--tag", "v1"], false).unwrap();
        assert_eq!(
            formatter.format_lookup(&report),
            "--tag at arguments 1..=2: v1\n"
        );

        let report = lookup("--tag", &["--tag=v1"], false).unwrap();
        assert_eq!(formatter.format_lookup(&report), "--tag at argument 0: v1\n");
    }

    #[test]
    fn test_format_lookup_not_found() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());
        let report = lookup("--tag", &["push"], false).unwrap();
        assert_eq!(formatter.format_lookup(&report), "--tag not found\n");
    }

    #[test]
    fn test_format_lookup_keeps_value_verbatim() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());

        let report = lookup("--tag", &["--tag=🐸"], false).unwrap();
        assert_eq!(formatter.format_lookup(&report), "--tag at argument 0: 🐸\n");

        let report = lookup("--tag", &["--tag=v1 "], false).unwrap();
        assert_eq!(
            formatter.format_lookup(&report),
            "--tag at argument 0: \"v1 \"\n"
        );
    }

    #[test]
    fn test_format_peel_keeps_emoji_value() {
        let formatter = HumanFormatter::new(FixedTerminal::plain());
        let specs = [FlagSpec::string("tag")];
        let report = peel(&["push", "--tag", "🐸"], &specs).unwrap();
        let output = formatter.format_peel(&report);

        assert!(output.contains("  --tag  🐸\n"));
        assert!(!output.contains("🧹"));
    }

    #[test]
    fn test_quote_arg() {
        assert_eq!(quote_arg("plain"), "plain");
        assert_eq!(quote_arg("two words"), "\"two words\"");
        assert_eq!(quote_arg(""), "\"\"");
    }
}
