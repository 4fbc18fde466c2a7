//! Processed Document - Output structure of the NLP pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::classifier::ClassificationResult;

/// Counts derived from the token sets of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Length of the original text, in characters
    pub original_length: usize,
    pub token_count: usize,
    pub unique_tokens: usize,
    pub tokens_after_stopwords: usize,
    pub tokens_after_stemming: usize,
    pub keyword_count: usize,
    pub productive_hits: u32,
    pub unproductive_hits: u32,
}

impl Statistics {
    /// Recompute every count from the values it summarizes.
    pub fn derive(
        original: &str,
        tokens: &[String],
        tokens_clean: &[String],
        tokens_stemmed: &[String],
        keywords: &[String],
        classification: &ClassificationResult,
    ) -> Self {
        Self {
            original_length: original.chars().count(),
            token_count: tokens.len(),
            unique_tokens: tokens.iter().collect::<HashSet<_>>().len(),
            tokens_after_stopwords: tokens_clean.len(),
            tokens_after_stemming: tokens_stemmed.len(),
            keyword_count: keywords.len(),
            productive_hits: classification.productive_count,
            unproductive_hits: classification.unproductive_count,
        }
    }
}

/// Everything the pipeline produced for one input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub original: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub tokens_clean: Vec<String>,
    pub tokens_stemmed: Vec<String>,
    pub keywords: Vec<String>,
    pub classification: ClassificationResult,
    pub statistics: Statistics,
    /// Stemmed tokens joined by single spaces
    pub processed_text: String,
    /// Set only on the degraded document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessedDocument {
    /// Minimal document for input that could not be processed.
    ///
    /// Classified as productive: an unreadable e-mail is treated as needing
    /// attention rather than dropped.
    pub fn degraded(original: Option<&str>, error: impl Into<String>) -> Self {
        let original = original.unwrap_or_default().to_string();
        let classification = ClassificationResult::processing_error();
        let statistics = Statistics::derive(&original, &[], &[], &[], &[], &classification);

        Self {
            original,
            normalized: String::new(),
            tokens: vec![],
            tokens_clean: vec![],
            tokens_stemmed: vec![],
            keywords: vec![],
            classification,
            statistics,
            processed_text: String::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {} ({:.0}%), Tokens: {}, Keywords: {}, Hits: {}/{}",
            self.classification.category,
            self.classification.confidence * 100.0,
            self.statistics.token_count,
            self.statistics.keyword_count,
            self.statistics.productive_hits,
            self.statistics.unproductive_hits
        )
    }
}
