//! Text normalization and tokenization.
//!
//! Normalization case-folds and strips diacritics (NFKD decomposition, then
//! combining marks are dropped). Tokenization replaces every non-word,
//! non-space character with a space and splits on whitespace.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// NOTE: expect() is acceptable here: the pattern is a compile-time constant.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid regex: non-word characters"));

/// Lowercase `text` and remove its diacritical marks ("Árvore" -> "arvore", "ç" -> "c").
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    // Folded twice: compatibility decomposition can surface uppercase letters.
    text.to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Split text into word tokens, dropping punctuation and empty fragments.
///
/// Tokens keep the casing of the input; the pipeline calls this after
/// [`normalize`], so its tokens are already lowercase and unaccented.
pub fn tokenize(text: &str) -> Vec<String> {
    NON_WORD
        .replace_all(text, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
