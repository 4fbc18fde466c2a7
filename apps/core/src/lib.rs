//! Mailsort core library.
//!
//! Classifies Portuguese e-mails as productive or unproductive and suggests a
//! reply. The external AI classifier is tried first; the deterministic NLP
//! pipeline in [`nlp`] is the fallback and never needs the network.

pub mod ai;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod nlp;

#[cfg(test)]
mod tests;

pub use ai::ClassificationOrchestrator;
pub use config::AppConfig;
pub use error::AppError;
pub use models::{ClassificationSource, EmailAnalysis, Verdict};
pub use nlp::{Category, ClassificationResult, ProcessedDocument, TextPipeline};
