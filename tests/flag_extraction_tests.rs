//! Integration tests for flag location, removal and extraction
//!
//! This test suite verifies through the public API that:
//! - Absent flags are reported as not found, never as errors
//! - Both `--flag=value` and `--flag value` forms are located
//! - Malformed values are rejected with the flag name in the error
//! - Removing a flag keeps every other argument in order
//! - Extraction leaves the caller's arguments untouched

use argpeel::FlagError;
use argpeel::flags::{
    FlagMatch, extract_fail, extract_server_id, extract_threads, find_boolean_flag, find_flag,
    find_flag_first_match, remove_flag_from_command,
};
use argpeel::output::{FixedTerminal, Formatter, Style};

/// Helper to build an owned argument vector
fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_absent_flag_is_not_an_error() {
    let cases = [
        args(&[]),
        args(&["upload", "a.zip", "repo/"]),
        args(&["--thread", "4"]),
        args(&["-threads", "4"]),
        args(&["--threads-max=4"]),
    ];
    for case in &cases {
        assert_eq!(
            find_flag("--threads", case).unwrap(),
            None,
            "unexpected match in {:?}",
            case
        );
    }
}

#[test]
fn test_located_positions() {
    assert_eq!(
        find_flag("--threads", &args(&["--threads=4"])).unwrap(),
        Some(FlagMatch {
            index: 0,
            value_index: 0,
            value: "4".to_string()
        })
    );
    assert_eq!(
        find_flag("--threads", &args(&["--threads", "4"])).unwrap(),
        Some(FlagMatch {
            index: 0,
            value_index: 1,
            value: "4".to_string()
        })
    );
}

#[test]
fn test_malformed_values_are_errors() {
    for case in [
        args(&["--threads"]),
        args(&["--threads", "--other"]),
        args(&["--threads="]),
    ] {
        let err = find_flag("--threads", &case).unwrap_err();
        assert_eq!(err.flag(), "--threads", "for {:?}", case);
        assert!(err.to_string().contains("--threads"));
    }
}

#[test]
fn test_prefix_collision_is_skipped() {
    assert_eq!(
        find_flag("--server-id", &args(&["--server-id-extra=x"])).unwrap(),
        None
    );
}

#[test]
fn test_removal_shrinks_by_span_and_keeps_order() {
    let original = args(&["a", "--tag=v1", "b", "--server-id", "prod", "c"]);

    let inline = find_flag("--tag", &original).unwrap().unwrap();
    let cleaned = remove_flag_from_command(&original, Some(inline.span()));
    assert_eq!(cleaned.len(), original.len() - 1);
    assert_eq!(cleaned, args(&["a", "b", "--server-id", "prod", "c"]));

    let split = find_flag("--server-id", &original).unwrap().unwrap();
    let cleaned = remove_flag_from_command(&original, Some(split.span()));
    assert_eq!(cleaned.len(), original.len() - 2);
    assert_eq!(cleaned, args(&["a", "--tag=v1", "b", "c"]));

    // The original sequence is never altered
    assert_eq!(original.len(), 6);
}

#[test]
fn test_wrappers_are_idempotent() {
    let original = args(&["rt", "--threads", "4", "--server-id=prod", "--fail", "x"]);

    assert_eq!(
        extract_threads(&original, 3).unwrap(),
        extract_threads(&original, 3).unwrap()
    );
    assert_eq!(
        extract_server_id(&original).unwrap(),
        extract_server_id(&original).unwrap()
    );
    assert_eq!(
        extract_fail(&original).unwrap(),
        extract_fail(&original).unwrap()
    );
    assert_eq!(original.len(), 6);
}

#[test]
fn test_chained_extraction_builds_clean_arguments() {
    let original = args(&["rt", "--threads", "4", "--server-id=prod", "--fail", "x"]);

    let threads = extract_threads(&original, 3).unwrap();
    let server_id = extract_server_id(&threads.clean_args).unwrap();
    let fail = extract_fail(&server_id.clean_args).unwrap();

    assert_eq!(threads.value, 4);
    assert_eq!(server_id.value, "prod");
    assert!(fail.value);
    assert_eq!(fail.clean_args, args(&["rt", "x"]));
}

#[test]
fn test_boolean_forms() {
    assert!(find_boolean_flag("--fail", &["--fail"]).unwrap().unwrap().value);
    assert!(
        !find_boolean_flag("--fail", &["--fail=false"])
            .unwrap()
            .unwrap()
            .value
    );
    assert!(matches!(
        find_boolean_flag("--fail", &["--fail=notabool"]),
        Err(FlagError::InvalidBool { .. })
    ));
}

#[test]
fn test_first_match_across_aliases() {
    let original = args(&["--url", "https://example.com", "upload"]);
    let found = find_flag_first_match(&["--server-url", "--url"], &original)
        .unwrap()
        .unwrap();
    assert_eq!(found.value, "https://example.com");
    assert_eq!(found.index, 0);
}

#[test]
fn test_formatter_behaviour_follows_capabilities() {
    let plain = Formatter::new(FixedTerminal::plain());
    assert_eq!(plain.style("🎉 Released", Style::Title), " Released");

    let color = Formatter::new(FixedTerminal::color());
    let styled = color.style("🎉 Released", Style::Title);
    assert!(styled.starts_with('\x1b'));
    assert!(styled.contains("🎉 Released"));
}
