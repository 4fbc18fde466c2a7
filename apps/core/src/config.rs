//! Process configuration read from the environment.
//!
//! A missing `GROQ_API_KEY` is not an error: the orchestrator then runs in
//! permanent fallback mode.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;
use validator::Validate;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_MAX_PROMPT_CHARS: usize = 2000;

/// Settings of the AI completion call.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct AiSettings {
    /// Base URL of an OpenAI-compatible API (without `/chat/completions`).
    #[validate(url)]
    pub base_url: String,
    #[validate(length(min = 1))]
    pub model: String,
    #[validate(range(min = 0.0, max = 2.0))]
    pub temperature: f32,
    #[validate(range(min = 1))]
    pub max_tokens: u32,
    #[validate(range(min = 1))]
    pub timeout_secs: u64,
    /// E-mail text beyond this many characters is cut before prompting.
    #[validate(range(min = 1))]
    pub max_prompt_chars: usize,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_prompt_chars: DEFAULT_MAX_PROMPT_CHARS,
        }
    }
}

impl AiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Clone, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub ai: AiSettings,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("ai", &self.ai)
            .finish()
    }
}

impl AppConfig {
    /// Read the configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("GROQ_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let ai = AiSettings {
            base_url: env::var("GROQ_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: parse_var("AI_TEMPERATURE", DEFAULT_TEMPERATURE)?,
            max_tokens: parse_var("AI_MAX_TOKENS", DEFAULT_MAX_TOKENS)?,
            timeout_secs: parse_var("AI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            max_prompt_chars: parse_var("AI_MAX_PROMPT_CHARS", DEFAULT_MAX_PROMPT_CHARS)?,
        };
        ai.validate()?;

        if api_key.is_none() {
            warn!("GROQ_API_KEY not set: AI classification disabled, keyword fallback only");
        }

        Ok(Self { api_key, ai })
    }

    /// Configuration that never calls the AI service.
    pub fn offline() -> Self {
        Self {
            api_key: None,
            ai: AiSettings::default(),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Load a `.env` file from the working directory or its parents.
///
/// Runs before logging is set up, so the caller reports the returned path.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenv::dotenv().ok()
}

/// Load a specific `.env` file, returning its path when it was read.
pub fn load_dotenv_from(path: &Path) -> Option<PathBuf> {
    dotenv::from_path(path).ok().map(|_| path.to_path_buf())
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{} = {:?}: {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "GROQ_API_KEY",
        "GROQ_BASE_URL",
        "GROQ_MODEL",
        "AI_TEMPERATURE",
        "AI_MAX_TOKENS",
        "AI_TIMEOUT_SECS",
        "AI_MAX_PROMPT_CHARS",
    ];

    fn with_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
        let vars: Vec<(&str, Option<&str>)> = VARS
            .iter()
            .map(|name| {
                let value = overrides.iter().find(|(k, _)| k == name).map(|(_, v)| *v);
                (*name, value)
            })
            .collect();
        temp_env::with_vars(vars, f);
    }

    #[test]
    fn test_defaults_without_key() {
        with_env(&[], || {
            let config = AppConfig::from_env().unwrap();
            assert!(!config.ai_enabled());
            assert_eq!(config.ai, AiSettings::default());
            assert_eq!(config.ai.timeout(), Duration::from_secs(30));
        });
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        with_env(&[("GROQ_API_KEY", "   ")], || {
            assert!(!AppConfig::from_env().unwrap().ai_enabled());
        });
    }

    #[test]
    fn test_overrides() {
        with_env(
            &[
                ("GROQ_API_KEY", "gsk_test"),
                ("GROQ_MODEL", "llama-3.1-8b-instant"),
                ("AI_TIMEOUT_SECS", "5"),
                ("AI_TEMPERATURE", "0.0"),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.api_key.as_deref(), Some("gsk_test"));
                assert_eq!(config.ai.model, "llama-3.1-8b-instant");
                assert_eq!(config.ai.timeout_secs, 5);
                assert_eq!(config.ai.temperature, 0.0);
            },
        );
    }

    #[test]
    fn test_unparsable_number_is_config_error() {
        with_env(&[("AI_TIMEOUT_SECS", "thirty")], || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
            assert!(err.to_string().contains("AI_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_out_of_range_is_config_error() {
        with_env(&[("AI_TEMPERATURE", "3.5")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
        with_env(&[("AI_TIMEOUT_SECS", "0")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
        with_env(&[("GROQ_BASE_URL", "not a url")], || {
            assert!(matches!(AppConfig::from_env(), Err(AppError::Config(_))));
        });
    }

    #[test]
    fn test_load_dotenv_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "MAILSORT_DOTENV_CHECK=loaded\n").unwrap();

        temp_env::with_var_unset("MAILSORT_DOTENV_CHECK", || {
            assert_eq!(load_dotenv_from(&path), Some(path.clone()));
            assert_eq!(env::var("MAILSORT_DOTENV_CHECK").as_deref(), Ok("loaded"));
        });
        assert_eq!(load_dotenv_from(&dir.path().join("missing.env")), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AppConfig {
            api_key: Some("gsk_secret".to_string()),
            ai: AiSettings::default(),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("gsk_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
