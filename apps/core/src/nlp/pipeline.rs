//! Document pipeline - runs every NLP stage over one input.
//!
//! normalize -> tokenize -> stopwords -> stemming -> keywords, with the keyword
//! classifier scoring the original text alongside. `process` is total: any
//! failure yields the degraded, conservatively classified document.

use tracing::{error, info};

use super::classifier::KeywordClassifier;
use super::cleaner::clean_email_text;
use super::document::{ProcessedDocument, Statistics};
use super::keywords::{rank_keywords, ExtractorConfig, KeywordExtractor, TokenStages, DEFAULT_TOP_N};
use crate::error::AppError;

/// Stateless pipeline over an immutable configuration
#[derive(Debug, Clone, Copy)]
pub struct TextPipeline {
    extractor: KeywordExtractor,
    classifier: KeywordClassifier,
    top_n: usize,
}

impl Default for TextPipeline {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl TextPipeline {
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_top_n(config, DEFAULT_TOP_N)
    }

    pub fn with_top_n(config: ExtractorConfig, top_n: usize) -> Self {
        Self {
            extractor: KeywordExtractor::new(config),
            classifier: KeywordClassifier::new(),
            top_n,
        }
    }

    pub fn config(&self) -> ExtractorConfig {
        self.extractor.config()
    }

    /// Process one document. Never fails; absent input gives the degraded document.
    pub fn process(&self, text: Option<&str>) -> ProcessedDocument {
        match self.try_process(text) {
            Ok(doc) => doc,
            Err(e) => {
                error!("NLP preprocessing failed: {}", e);
                ProcessedDocument::degraded(text, e.to_string())
            }
        }
    }

    /// Process one document, reporting failures instead of degrading.
    pub fn try_process(&self, text: Option<&str>) -> Result<ProcessedDocument, AppError> {
        let original = text.ok_or_else(|| AppError::Input("no text provided".to_string()))?;

        let TokenStages {
            normalized,
            tokens,
            tokens_clean,
            tokens_stemmed,
        } = self.extractor.stages(original);

        let keywords: Vec<String> = rank_keywords(&tokens_stemmed, self.top_n)
            .into_iter()
            .map(|k| k.keyword)
            .collect();

        let classification = self.classifier.classify(original);

        let statistics = Statistics::derive(
            original,
            &tokens,
            &tokens_clean,
            &tokens_stemmed,
            &keywords,
            &classification,
        );

        info!(
            "Text processed: {} tokens, {} keywords extracted",
            statistics.token_count, statistics.keyword_count
        );

        Ok(ProcessedDocument {
            original: original.to_string(),
            normalized,
            processed_text: tokens_stemmed.join(" "),
            tokens,
            tokens_clean,
            tokens_stemmed,
            keywords,
            classification,
            statistics,
            error: None,
        })
    }
}

/// Clean an e-mail body and run the default pipeline over it.
pub fn process_email_text(text: &str) -> ProcessedDocument {
    let cleaned = clean_email_text(text);
    TextPipeline::default().process(Some(&cleaned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::classifier::Category;

    #[test]
    fn test_full_document() {
        let doc = TextPipeline::default()
            .process(Some("Solicito urgente suporte no sistema de pagamento."));

        assert!(!doc.is_degraded());
        assert_eq!(doc.normalized, "solicito urgente suporte no sistema de pagamento.");
        assert_eq!(doc.tokens.len(), 7);
        assert_eq!(
            doc.tokens_clean,
            vec!["solicito", "urgente", "suporte", "sistema", "pagamento"]
        );
        // none of these words carries a known suffix
        assert_eq!(doc.tokens_stemmed, doc.tokens_clean);
        assert_eq!(doc.classification.category, Category::Productive);
        assert_eq!(doc.processed_text, "solicito urgente suporte sistema pagamento");
    }

    #[test]
    fn test_none_input_degrades() {
        let doc = TextPipeline::default().process(None);

        assert!(doc.is_degraded());
        assert_eq!(doc.classification.category, Category::Productive);
        assert_eq!(doc.classification.confidence, 0.5);
        assert!(doc.tokens.is_empty());
        assert!(doc.keywords.is_empty());
    }

    #[test]
    fn test_try_process_reports_input_error() {
        let err = TextPipeline::default().try_process(None).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn test_document_follows_extractor_stages() {
        let text = "As solicitações de pagamento estão atrasadas, solicito verificar o pagamento.";
        for config in [
            ExtractorConfig::default(),
            ExtractorConfig {
                remove_stopwords: true,
                apply_stemming: false,
            },
        ] {
            let pipeline = TextPipeline::new(config);
            let extractor = KeywordExtractor::new(config);
            let doc = pipeline.process(Some(text));

            assert_eq!(pipeline.config(), config);
            assert_eq!(doc.tokens_stemmed, extractor.filtered_tokens(text));
            assert_eq!(doc.keywords, extractor.extract_keywords(text, DEFAULT_TOP_N));
        }
    }

    #[test]
    fn test_flags_disable_stages() {
        let pipeline = TextPipeline::new(ExtractorConfig {
            remove_stopwords: false,
            apply_stemming: false,
        });
        let doc = pipeline.process(Some("o pagamento urgente"));

        assert_eq!(doc.tokens, doc.tokens_clean);
        assert_eq!(doc.tokens_clean, doc.tokens_stemmed);
        assert_eq!(doc.statistics.tokens_after_stemming, 3);
    }
}
