use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

/// One chat-completion request, as sent to the AI provider.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Ask the provider to constrain its output to a JSON object.
    pub json_response: bool,
}

/// Defines the public interface for an AI completion backend.
///
/// This trait abstracts the provider, allowing the HTTP client to be swapped
/// for an in-process mock in tests.
#[async_trait]
pub trait CompletionClient: Send + Sync + 'static {
    /// Returns the raw text content of the first completion choice.
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;

    /// Identifier of the model answering the requests.
    fn model(&self) -> &str;
}
