//! Validation of the AI service's JSON reply.
//!
//! Expected shape: `{categoria, confianca, motivo, resposta_sugerida}`.
//! Missing fields are defaulted; present-but-wrong ones are errors, except
//! `confianca`, which falls back to 0.8 whenever it is unusable.

use serde_json::{Map, Value};

use crate::ai::replies::template_reply;
use crate::error::AppError;
use crate::nlp::Category;

/// Confidence assumed when the AI omits it or sends garbage
pub const DEFAULT_AI_CONFIDENCE: f32 = 0.8;

/// A validated AI classification
#[derive(Debug, Clone, PartialEq)]
pub struct AiVerdict {
    pub category: Category,
    pub confidence: f32,
    pub reason: String,
    pub suggested_response: String,
}

/// Parse and validate the raw completion content.
pub fn parse_verdict(content: &str) -> Result<AiVerdict, AppError> {
    let value: Value = serde_json::from_str(content.trim())?;
    let fields = value.as_object().ok_or_else(|| {
        AppError::MalformedResponse(format!("expected a JSON object, got: {}", value))
    })?;

    let category = parse_category(fields)?;
    let confidence = parse_confidence(fields.get("confianca"));

    let reason = match fields.get("motivo") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => {
            return Err(AppError::MalformedResponse(format!(
                "\"motivo\" must be a string, got: {}",
                other
            )))
        }
    };

    let suggested_response = match fields.get("resposta_sugerida") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        None | Some(Value::Null) | Some(Value::String(_)) => template_reply(category).to_string(),
        Some(other) => {
            return Err(AppError::MalformedResponse(format!(
                "\"resposta_sugerida\" must be a string, got: {}",
                other
            )))
        }
    };

    Ok(AiVerdict {
        category,
        confidence,
        reason,
        suggested_response,
    })
}

fn parse_category(fields: &Map<String, Value>) -> Result<Category, AppError> {
    match fields.get("categoria") {
        None | Some(Value::Null) => Ok(Category::Productive),
        Some(Value::String(label)) => Category::from_label(label).ok_or_else(|| {
            AppError::MalformedResponse(format!("unknown category label: {:?}", label))
        }),
        Some(other) => Err(AppError::MalformedResponse(format!(
            "\"categoria\" must be a string, got: {}",
            other
        ))),
    }
}

fn parse_confidence(value: Option<&Value>) -> f32 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match raw {
        Some(c) if (0.0..=1.0).contains(&c) => c as f32,
        _ => DEFAULT_AI_CONFIDENCE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_reply() {
        let verdict = parse_verdict(
            r#"{"categoria": "Improdutivo", "confianca": 0.95, "motivo": "agradecimento", "resposta_sugerida": "Obrigado!"}"#,
        )
        .unwrap();

        assert_eq!(verdict.category, Category::Unproductive);
        assert!((verdict.confidence - 0.95).abs() < 1e-6);
        assert_eq!(verdict.reason, "agradecimento");
        assert_eq!(verdict.suggested_response, "Obrigado!");
    }

    #[test]
    fn test_missing_fields_are_defaulted() {
        let verdict = parse_verdict("{}").unwrap();

        assert_eq!(verdict.category, Category::Productive);
        assert_eq!(verdict.confidence, DEFAULT_AI_CONFIDENCE);
        assert_eq!(verdict.reason, "");
        assert_eq!(verdict.suggested_response, template_reply(Category::Productive));
    }

    #[test]
    fn test_blank_reply_uses_template() {
        let verdict = parse_verdict(r#"{"categoria": "Improdutivo", "resposta_sugerida": "  "}"#).unwrap();
        assert_eq!(verdict.suggested_response, template_reply(Category::Unproductive));
    }

    #[test]
    fn test_invalid_confidence_defaults() {
        for raw in [r#""alta""#, "1.7", "-0.2", "null", "[0.5]"] {
            let verdict = parse_verdict(&format!(r#"{{"confianca": {}}}"#, raw)).unwrap();
            assert_eq!(verdict.confidence, DEFAULT_AI_CONFIDENCE, "for {}", raw);
        }
        let verdict = parse_verdict(r#"{"confianca": "0.65"}"#).unwrap();
        assert!((verdict.confidence - 0.65).abs() < 1e-6);
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let err = parse_verdict(r#"{"categoria": "Spam"}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }

    #[test]
    fn test_non_json_is_rejected() {
        assert!(matches!(
            parse_verdict("Claro! Este email é produtivo."),
            Err(AppError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(matches!(parse_verdict("[1, 2]"), Err(AppError::MalformedResponse(_))));
        assert!(matches!(parse_verdict("\"Produtivo\""), Err(AppError::MalformedResponse(_))));
    }

    #[test]
    fn test_wrong_field_types_are_rejected() {
        assert!(parse_verdict(r#"{"categoria": 1}"#).is_err());
        assert!(parse_verdict(r#"{"motivo": {"a": 1}}"#).is_err());
        assert!(parse_verdict(r#"{"resposta_sugerida": 42}"#).is_err());
    }
}
