use std::io;
use thiserror::Error;

/// Crate-wide error type.
///
/// None of these variants is fatal to the hosting process: the pipeline and the
/// orchestrator turn every one of them into a conservative classification.
#[derive(Debug, Error)]
pub enum AppError {
    /// Absent or unusable input handed to the NLP pipeline.
    #[error("Input error: {0}")]
    Input(String),

    /// Transport-level or HTTP-status failure while calling the AI service.
    #[error("AI service error: {0}")]
    Ai(String),

    /// The AI service answered, but not with the JSON object we asked for.
    #[error("Malformed AI response: {0}")]
    MalformedResponse(String),

    /// Represents errors from operations that did not complete in time.
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream input checks (e.g., text shorter than the accepted minimum).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents unexpected internal failures (e.g., output serialization).
    #[error("Internal error: {0}")]
    Internal(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Whether the error came from the AI call and should route to the keyword fallback.
    pub fn is_ai_failure(&self) -> bool {
        matches!(
            self,
            AppError::Ai(_) | AppError::MalformedResponse(_) | AppError::Timeout(_)
        )
    }
}

impl From<tokio::time::error::Elapsed> for AppError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        AppError::Timeout(format!("AI call exceeded its deadline: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(format!("HTTP request timed out: {}", err))
        } else {
            AppError::Ai(format!("HTTP error: {}", err))
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Config(format!("Invalid settings: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_failure_kinds() {
        assert!(AppError::Ai("down".into()).is_ai_failure());
        assert!(AppError::Timeout("slow".into()).is_ai_failure());
        assert!(AppError::MalformedResponse("bad".into()).is_ai_failure());
        assert!(!AppError::Config("missing".into()).is_ai_failure());
        assert!(!AppError::Input("none".into()).is_ai_failure());
    }

    #[test]
    fn test_serde_error_is_malformed_response() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::MalformedResponse(_)));
    }
}
