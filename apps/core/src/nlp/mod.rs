//! # NLP Module
//!
//! Deterministic, network-free text processing for Portuguese e-mails.
//! It is both the fallback classifier when the AI call fails and the source of
//! the keyword context sent to the AI.
//!
//! ## Components
//! - `normalizer`: case folding, diacritic stripping, tokenization
//! - `stopwords`: Portuguese stopword filter
//! - `stemmer`: ordered single-pass suffix stemmer
//! - `keywords`: frequency-ranked keyword extraction
//! - `classifier`: keyword-weighted two-category classifier
//! - `cleaner`: e-mail body cleanup (URLs, addresses, phone numbers)
//! - `document`: output data structures
//! - `pipeline`: main orchestrator

pub mod classifier;
pub mod cleaner;
pub mod document;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod stemmer;
pub mod stopwords;

pub use classifier::{
    classify, Category, ClassificationResult, KeywordClassifier, PROCESSING_ERROR_REASON,
};
pub use cleaner::{clean_email_text, prepare_text};
pub use document::{ProcessedDocument, Statistics};
pub use keywords::{ExtractorConfig, KeywordExtractor, KeywordResult};
pub use normalizer::{normalize, tokenize};
pub use pipeline::{process_email_text, TextPipeline};
pub use stemmer::stem;
pub use stopwords::remove_stop_words;
