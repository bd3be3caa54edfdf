//! Emoji detection and removal for terminals that cannot render them

use regex::Regex;
use std::sync::LazyLock;

/// Matches a full emoji sequence: keycaps, flags, pictographs with optional
/// variation selectors, skin tone modifiers and zero-width-joiner chains.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"[#*0-9]\x{FE0F}?\x{20E3}",
        r"|[\x{1F1E6}-\x{1F1FF}]{1,2}",
        r"|[\p{Extended_Pictographic}\p{Emoji_Modifier}][\x{FE0F}\p{Emoji_Modifier}]*",
        r"(?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\p{Emoji_Modifier}]*)*",
    ))
    .expect("emoji pattern is valid")
});

/// Whether `text` contains at least one emoji
pub fn contains_emoji(text: &str) -> bool {
    EMOJI.is_match(text)
}

/// Remove every emoji from `text`, leaving the surrounding text untouched
pub fn remove_emoji(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}
