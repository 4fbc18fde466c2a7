//! Portuguese stopword filtering.
//!
//! Articles, prepositions, pronouns, auxiliary verbs and e-mail boilerplate
//! (greetings and sign-offs). Membership is exact on the lowercased token.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Stopwords for Brazilian Portuguese
const STOPWORDS_PT: &[&str] = &[
    // articles and contractions
    "a", "o", "e", "é", "de", "da", "do", "em", "um", "uma", "os", "as", "dos", "das",
    "ao", "aos", "à", "às", "no", "na", "nos", "nas", "pelo", "pela", "pelos", "pelas",
    // prepositions and conjunctions
    "para", "com", "por", "sem", "sob", "sobre", "que", "qual", "quando", "onde", "como",
    "se", "mas", "mais", "menos", "muito", "pouco",
    // determiners
    "todo", "toda", "todos", "todas", "outro", "outra", "outros", "outras", "mesmo",
    "mesma", "mesmos", "mesmas", "tal", "tais", "este", "esta", "estes", "estas", "esse",
    "essa", "esses", "essas", "aquele", "aquela", "aqueles", "aquelas", "isto", "isso",
    "aquilo",
    // pronouns
    "eu", "tu", "ele", "ela", "nós", "vós", "eles", "elas", "me", "te", "lhe", "vos",
    "lhes", "meu", "minha", "meus", "minhas", "teu", "tua", "teus", "tuas", "seu", "sua",
    "seus", "suas", "nosso", "nossa", "nossos", "nossas", "vosso", "vossa", "vossos",
    "vossas",
    // auxiliary and light verbs
    "ser", "estar", "ter", "haver", "fazer", "ir", "poder", "dar", "ver", "saber",
    "querer", "dizer",
    // e-mail boilerplate
    "olá", "oi", "obrigado", "obrigada", "por favor", "att", "atenciosamente",
    "cordialmente", "abs", "abraço", "abraços",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS_PT.iter().copied().collect());

/// Check if a word is a Portuguese stopword
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word.to_lowercase().as_str())
}

/// Remove stopwords from a token sequence, preserving order.
pub fn remove_stop_words(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|t| !is_stopword(t))
        .cloned()
        .collect()
}
