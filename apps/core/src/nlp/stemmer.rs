//! Light Portuguese suffix stemmer.
//!
//! Greedy and single-pass: the first rule whose suffix matches and leaves at
//! least three characters wins, and the result is never re-stemmed. Rule order
//! matters ("amente" must be tried before "mente", "ação" before "ar").

/// Ordered `(suffix, replacement)` rules.
const STEMMING_RULES: &[(&str, &str)] = &[
    ("amente", ""),
    ("mente", ""),
    ("ação", ""),
    ("ções", ""),
    ("ador", ""),
    ("ante", ""),
    ("ência", ""),
    ("ância", ""),
    ("ismo", ""),
    ("ista", ""),
    ("oso", ""),
    ("osa", ""),
    ("ivo", ""),
    ("iva", ""),
    ("idade", ""),
    ("ar", ""),
    ("er", ""),
    ("ir", ""),
];

/// Minimum number of characters a stem must keep.
const MIN_STEM_CHARS: usize = 3;

/// Reduce a word to its approximate root.
///
/// The word is lowercased; when no rule applies it is returned unchanged.
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();

    for (suffix, replacement) in STEMMING_RULES {
        if let Some(root) = lower.strip_suffix(suffix) {
            if root.chars().count() >= MIN_STEM_CHARS {
                return format!("{}{}", root, replacement);
            }
        }
    }

    lower
}

/// Stem every token, preserving order.
pub fn stem_tokens(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|t| stem(t)).collect()
}
