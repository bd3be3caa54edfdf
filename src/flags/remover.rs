//! Removing a located flag from an argument vector

use super::locator::FlagSpan;

/// Return a copy of `args` without the tokens covered by `span`
///
/// `None` means the flag was not found and the copy is returned unchanged.
/// The input is never modified, and the remaining tokens keep their relative order.
/// A span reaching past the end of `args` removes up to the last token.
pub fn remove_flag_from_command<S: AsRef<str>>(args: &[S], span: Option<FlagSpan>) -> Vec<String> {
    let Some(span) = span else {
        return args.iter().map(|arg| arg.as_ref().to_string()).collect();
    };

    log::debug!("removing arguments {}..={}", span.start, span.end);

    args.iter()
        .enumerate()
        .filter(|(index, _)| !(span.start..=span.end).contains(index))
        .map(|(_, arg)| arg.as_ref().to_string())
        .collect()
}
