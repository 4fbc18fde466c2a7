use crate::ai::groq::GroqClient;
use crate::ai::prompt::classification_request;
use crate::ai::replies::template_reply;
use crate::ai::traits::CompletionClient;
use crate::ai::verdict::{parse_verdict, AiVerdict};
use crate::config::{AiSettings, AppConfig};
use crate::error::AppError;
use crate::models::{ClassificationSource, EmailAnalysis, ServiceStatus, Verdict};
use crate::nlp::{
    clean_email_text, prepare_text, ClassificationResult, KeywordClassifier, ProcessedDocument, TextPipeline,
};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

/// Reason reported on every keyword-fallback result
pub const FALLBACK_REASON: &str = "keyword-based (fallback)";

/// Classifies e-mails with the AI service, falling back to the keyword classifier.
///
/// Every public method is total: AI failures are logged and replaced by the
/// deterministic result, never returned to the caller.
#[derive(Clone)]
pub struct ClassificationOrchestrator {
    client: Option<Arc<dyn CompletionClient>>,
    settings: AiSettings,
    pipeline: TextPipeline,
    classifier: KeywordClassifier,
}

impl ClassificationOrchestrator {
    /// Creates an orchestrator around `client`; `None` means fallback-only mode.
    pub fn new(client: Option<Arc<dyn CompletionClient>>, settings: AiSettings) -> Self {
        Self {
            client,
            settings,
            pipeline: TextPipeline::default(),
            classifier: KeywordClassifier::new(),
        }
    }

    /// Builds the Groq-backed orchestrator, or a fallback-only one when no key is configured.
    pub fn from_config(config: &AppConfig) -> Self {
        let client: Option<Arc<dyn CompletionClient>> = match &config.api_key {
            Some(key) => match GroqClient::new(key.clone(), config.ai.clone()) {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("AI client unavailable, using keyword fallback only: {}", e);
                    None
                }
            },
            None => None,
        };
        Self::new(client, config.ai.clone())
    }

    /// Fallback-only orchestrator.
    pub fn offline() -> Self {
        Self::new(None, AiSettings::default())
    }

    pub fn with_pipeline(mut self, pipeline: TextPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.client.is_some()
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            status: "healthy".to_string(),
            ai_provider: if self.is_ai_enabled() { "ok" } else { "missing api key" }.to_string(),
            ai_model: self
                .client
                .as_ref()
                .map(|c| c.model().to_string())
                .unwrap_or_else(|| self.settings.model.clone()),
            timeout_secs: self.settings.timeout_secs,
            timestamp: Utc::now(),
        }
    }

    /// Full analysis of a raw e-mail body: cleanup, NLP statistics, classification.
    #[instrument(skip_all, fields(chars = raw.chars().count()))]
    pub async fn analyze(&self, raw: &str) -> EmailAnalysis {
        let text = prepare_text(&clean_email_text(raw));
        let document = self.pipeline.process(Some(&text));
        debug!("NLP document: {}", document.summary());

        let verdict = self.classify(&text, &document.keywords).await;
        info!(
            "E-mail classified as {} ({:?}, confidence {:.2})",
            verdict.classification.category, verdict.source, verdict.classification.confidence
        );

        let mut analysis = EmailAnalysis::from_verdict(verdict, text.chars().count());
        analysis.keywords = Some(document.keywords);
        analysis.nlp_stats = Some(document.statistics);
        analysis
    }

    /// Run only the NLP pipeline over a raw e-mail body (after cleanup).
    pub fn process(&self, raw: &str) -> ProcessedDocument {
        debug!("Processing e-mail with {:?}", self.pipeline.config());
        let document = self.pipeline.process(Some(&clean_email_text(raw)));
        debug!("NLP document: {}", document.summary());
        document
    }

    /// Analyze several e-mails concurrently, preserving input order.
    pub async fn analyze_many(&self, texts: &[String]) -> Vec<EmailAnalysis> {
        join_all(texts.iter().map(|t| self.analyze(t))).await
    }

    /// Classify prepared text, using `keywords` as hints for the AI.
    pub async fn classify(&self, text: &str, keywords: &[String]) -> Verdict {
        let keyword_result = self.classifier.classify(text);

        let Some(client) = &self.client else {
            debug!("No AI client configured, using keyword classification");
            return self.fallback(keyword_result);
        };

        match self.classify_with_ai(client.as_ref(), text, keywords).await {
            Ok(ai) => {
                if ai.category != keyword_result.category {
                    debug!(
                        "AI verdict {} disagrees with keyword verdict {}",
                        ai.category, keyword_result.category
                    );
                }
                Verdict {
                    classification: ClassificationResult {
                        category: ai.category,
                        confidence: ai.confidence,
                        reason: ai.reason,
                        ..keyword_result
                    },
                    suggested_response: ai.suggested_response,
                    source: ClassificationSource::Ai,
                    model: Some(client.model().to_string()),
                }
            }
            Err(e) if e.is_ai_failure() => {
                warn!("AI classification failed, falling back to keywords: {}", e);
                self.fallback(keyword_result)
            }
            Err(e) => {
                error!("Unexpected error on the AI path, falling back to keywords: {}", e);
                self.fallback(keyword_result)
            }
        }
    }

    async fn classify_with_ai(
        &self,
        client: &dyn CompletionClient,
        text: &str,
        keywords: &[String],
    ) -> Result<AiVerdict, AppError> {
        let request = classification_request(text, keywords, &self.settings);
        let content = timeout(self.settings.timeout(), client.complete(request)).await??;
        parse_verdict(&content)
    }

    fn fallback(&self, keyword_result: ClassificationResult) -> Verdict {
        let suggested_response = template_reply(keyword_result.category).to_string();
        Verdict {
            classification: ClassificationResult {
                reason: FALLBACK_REASON.to_string(),
                ..keyword_result
            },
            suggested_response,
            source: ClassificationSource::Fallback,
            model: None,
        }
    }
}
