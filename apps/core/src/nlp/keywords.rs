//! Keyword extraction by term frequency.
//!
//! normalize -> tokenize -> (stopword removal) -> (stemming), then tokens
//! longer than two characters are counted and ranked by descending frequency.
//! Equal frequencies keep first-occurrence order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::normalizer::{normalize, tokenize};
use super::stemmer::stem_tokens;
use super::stopwords::remove_stop_words;

/// Default number of keywords returned by the pipeline
pub const DEFAULT_TOP_N: usize = 10;

/// Tokens must be longer than this to count as keywords
const MIN_KEYWORD_CHARS: usize = 2;

/// Which optional stages run after tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub remove_stopwords: bool,
    pub apply_stemming: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            remove_stopwords: true,
            apply_stemming: true,
        }
    }
}

/// Result of keyword extraction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordResult {
    /// The (possibly stemmed) keyword
    pub keyword: String,
    /// Raw frequency in the filtered token stream
    pub frequency: usize,
}

/// Token sets produced by each stage, in stage order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStages {
    pub normalized: String,
    pub tokens: Vec<String>,
    /// After stopword removal (equal to `tokens` when disabled)
    pub tokens_clean: Vec<String>,
    /// After stemming (equal to `tokens_clean` when disabled)
    pub tokens_stemmed: Vec<String>,
}

/// Frequency-based keyword extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor {
    config: ExtractorConfig,
}

impl KeywordExtractor {
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// Run the configured token stages over raw text, keeping every intermediate set.
    pub fn stages(&self, text: &str) -> TokenStages {
        let normalized = normalize(text);
        let tokens = tokenize(&normalized);

        let tokens_clean = if self.config.remove_stopwords {
            remove_stop_words(&tokens)
        } else {
            tokens.clone()
        };

        let tokens_stemmed = if self.config.apply_stemming {
            stem_tokens(&tokens_clean)
        } else {
            tokens_clean.clone()
        };

        TokenStages {
            normalized,
            tokens,
            tokens_clean,
            tokens_stemmed,
        }
    }

    /// The token stream keywords are counted from.
    pub fn filtered_tokens(&self, text: &str) -> Vec<String> {
        self.stages(text).tokens_stemmed
    }

    /// Extract the top N keywords from text
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<KeywordResult> {
        rank_keywords(&self.filtered_tokens(text), top_n)
    }

    /// Extract keywords and return just the strings
    pub fn extract_keywords(&self, text: &str, top_n: usize) -> Vec<String> {
        self.extract(text, top_n)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }
}

/// Rank already-filtered tokens by frequency.
///
/// Counting happens in first-occurrence order and the sort is stable, so ties
/// come out in the order the tokens first appeared.
pub fn rank_keywords(tokens: &[String], top_n: usize) -> Vec<KeywordResult> {
    let mut ranked: Vec<KeywordResult> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        if token.chars().count() <= MIN_KEYWORD_CHARS {
            continue;
        }
        match positions.get(token.as_str()) {
            Some(&idx) => ranked[idx].frequency += 1,
            None => {
                positions.insert(token.as_str(), ranked.len());
                ranked.push(KeywordResult {
                    keyword: token.clone(),
                    frequency: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(top_n);
    ranked
}
