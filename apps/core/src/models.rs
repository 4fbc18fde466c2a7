use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::nlp::{Category, ClassificationResult, Statistics};

/// Which classifier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// The external AI service answered with a valid verdict.
    Ai,
    /// The keyword classifier stood in for the AI service.
    Fallback,
}

/// A classification plus the reply to suggest for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Category, confidence and reason of the winning classifier. The keyword
    /// counts are always the keyword classifier's, even on the AI path.
    pub classification: ClassificationResult,
    pub suggested_response: String,
    pub source: ClassificationSource,
    /// Model that produced the verdict (AI path only).
    pub model: Option<String>,
}

/// The result handed to callers for one e-mail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAnalysis {
    pub category: Category,
    pub suggested_response: String,
    pub confidence: f32,
    pub reason: String,
    /// Length of the prepared text, in characters.
    pub text_length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nlp_stats: Option<Statistics>,
    pub source: ClassificationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_model: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl EmailAnalysis {
    pub fn from_verdict(verdict: Verdict, text_length: usize) -> Self {
        Self {
            category: verdict.classification.category,
            suggested_response: verdict.suggested_response,
            confidence: verdict.classification.confidence,
            reason: verdict.classification.reason,
            text_length,
            keywords: None,
            nlp_stats: None,
            source: verdict.source,
            ai_model: verdict.model,
            timestamp: Utc::now(),
        }
    }
}

/// Whether the AI provider can be used, for health reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    /// "ok" or "missing api key"
    pub ai_provider: String,
    pub ai_model: String,
    pub timeout_secs: u64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict() -> Verdict {
        Verdict {
            classification: crate::nlp::classify("Bom dia, parabéns pelo excelente trabalho!"),
            suggested_response: "Obrigado!".to_string(),
            source: ClassificationSource::Fallback,
            model: None,
        }
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let analysis = EmailAnalysis::from_verdict(verdict(), 42);
        let json = serde_json::to_value(&analysis).unwrap();

        assert_eq!(json["category"], "Improdutivo");
        assert_eq!(json["source"], "fallback");
        assert_eq!(json["text_length"], 42);
        assert!(json.get("keywords").is_none());
        assert!(json.get("nlp_stats").is_none());
        assert!(json.get("ai_model").is_none());
    }

    #[test]
    fn test_optional_fields_present_when_set() {
        let mut analysis = EmailAnalysis::from_verdict(verdict(), 42);
        analysis.keywords = Some(vec!["parabens".to_string()]);
        analysis.nlp_stats = Some(Statistics::default());

        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["keywords"][0], "parabens");
        assert_eq!(json["nlp_stats"]["token_count"], 0);
    }
}
