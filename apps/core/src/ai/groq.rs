use crate::ai::traits::{CompletionClient, CompletionRequest};
use crate::config::AiSettings;
use crate::error::AppError;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde_json::json;
use tokio::time::timeout;
use tracing::{debug, info};

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint (Groq by default).
#[derive(Clone)]
pub struct GroqClient {
    client: Client,
    base_url: String,
    api_key: String,
    settings: AiSettings,
}

impl GroqClient {
    /// Creates a client for `settings.base_url`, authenticating with `api_key`.
    pub fn new(api_key: String, settings: AiSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key,
            settings,
        })
    }

    fn build_request(&self, endpoint: &str, payload: &serde_json::Value) -> Result<reqwest::RequestBuilder, AppError> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
            .map_err(|e| AppError::Config(format!("Invalid API key header: {}", e)))?;
        headers.insert(AUTHORIZATION, auth_value);

        Ok(self
            .client
            .post(format!("{}/{}", self.base_url, endpoint))
            .headers(headers)
            .json(payload))
    }

    fn payload(&self, request: &CompletionRequest) -> serde_json::Value {
        let mut payload = json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.prompt },
            ],
            "temperature": request.temperature,
            "max_tokens": request.max_tokens,
        });

        if request.json_response {
            payload["response_format"] = json!({ "type": "json_object" });
        }

        payload
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, AppError> {
        info!("AI completion requested ({} prompt chars)", request.prompt.chars().count());

        let payload = self.payload(&request);
        let request_future = self.build_request("chat/completions", &payload)?.send();

        let res = timeout(self.settings.timeout(), request_future).await??;

        let status = res.status();
        if !status.is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(AppError::Ai(format!(
                "Completion request failed with status {}: {}",
                status, body
            )));
        }

        let json: serde_json::Value = res
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                AppError::MalformedResponse("completion has no choices[0].message.content".to_string())
            })?;

        debug!("AI completion content: {}", content);
        Ok(content.to_string())
    }

    fn model(&self) -> &str {
        &self.settings.model
    }
}
