//! Flag location, removal and typed extraction over raw argument vectors

pub mod extract;
pub mod locator;
pub mod remover;

pub use extract::{
    Extracted, extract_bool_option, extract_detailed_summary, extract_fail, extract_format,
    extract_insecure_tls, extract_int_option, extract_licenses, extract_repo_path,
    extract_run_native, extract_scan, extract_server_id, extract_skip_login,
    extract_string_option, extract_tag, extract_threads, extract_watches,
};
pub use locator::{
    BoolFlagMatch, FlagMatch, FlagSpan, find_boolean_flag, find_flag, find_flag_first_match,
};
pub use remover::remove_flag_from_command;
