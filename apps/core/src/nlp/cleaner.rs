//! E-mail body cleanup applied before NLP processing.

use regex::Regex;
use std::sync::LazyLock;

// NOTE: expect() is acceptable here: every pattern is a compile-time constant.
static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("Invalid regex: newline runs"));
static EXCESS_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("Invalid regex: space runs"));
static SYMBOL_ONLY_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[^\w\s]+$").expect("Invalid regex: symbol-only lines"));
static URLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"]+"#).expect("Invalid regex: URLs"));
static EMAIL_ADDRESSES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+").expect("Invalid regex: e-mail addresses"));
static PHONE_NUMBERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(?\d{2}\)?\s?\d{4,5}-?\d{4}").expect("Invalid regex: phone numbers")
});
static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex: whitespace runs"));
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\w\s.,!?;:\-@]").expect("Invalid regex: disallowed characters")
});

/// Strip signatures-adjacent noise from an e-mail body.
///
/// Collapses blank-line and space runs, empties symbol-only lines (separators
/// such as `-----`), then removes URLs, e-mail addresses and phone numbers.
pub fn clean_email_text(text: &str) -> String {
    let text = EXCESS_NEWLINES.replace_all(text, "\n\n");
    let text = EXCESS_SPACES.replace_all(&text, " ");
    let text = SYMBOL_ONLY_LINES.replace_all(&text, "");
    let text = URLS.replace_all(&text, "");
    let text = EMAIL_ADDRESSES.replace_all(&text, "");
    let text = PHONE_NUMBERS.replace_all(&text, "");
    text.trim().to_string()
}

/// Flatten text to a single line of words and common punctuation.
pub fn prepare_text(text: &str) -> String {
    let text = WHITESPACE_RUNS.replace_all(text, " ");
    let text = DISALLOWED_CHARS.replace_all(&text, "");
    text.trim().to_string()
}
