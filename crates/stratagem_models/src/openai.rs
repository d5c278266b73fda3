//! OpenAI-compatible chat-completions driver using reqwest.

use crate::dto::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use async_trait::async_trait;
use reqwest::Client;
use stratagem_core::{GenerateRequest, GenerateResponse};
use stratagem_error::{ConfigError, LlmError, LlmErrorKind, StratagemResult};
use stratagem_interface::LlmDriver;
use tracing::{debug, error, instrument};

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Driver for any endpoint speaking the OpenAI chat-completions protocol.
///
/// The API key is optional at construction so the rest of the pipeline can be
/// wired without credentials; a missing key is reported as a
/// [`ConfigError`] when `generate` is first called.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    /// Creates a client for the public OpenAI endpoint.
    #[instrument(skip_all)]
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(model = %model, has_key = api_key.is_some(), "Created OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            model,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Points the client at another chat-completions URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Chat-completions URL in use.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_body(&self, req: &GenerateRequest) -> StratagemResult<ChatCompletionRequest> {
        let model = req.model.clone().unwrap_or_else(|| self.model.clone());
        let body = ChatCompletionRequest::builder()
            .model(model)
            .messages(req.messages.iter().map(ChatMessage::from).collect::<Vec<_>>())
            .temperature(req.temperature)
            .max_tokens(req.max_tokens)
            .build()
            .map_err(|e| LlmError::new(LlmErrorKind::RequestBuilding(e.to_string())))?;
        Ok(body)
    }
}

#[async_trait]
impl LlmDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(model = %self.model, messages = req.messages.len()))]
    async fn generate(&self, req: &GenerateRequest) -> StratagemResult<GenerateResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new("Missing OpenAI API key (set OPENAI_API_KEY)"))?;

        let body = self.build_body(req)?;

        debug!(endpoint = %self.endpoint, "Sending chat-completions request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                LlmError::new(LlmErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(status = %status, error = %error_text, "API error");
            return Err(LlmError::new(LlmErrorKind::Api {
                status: status.as_u16(),
                message: error_text,
            })
            .into());
        }

        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response");
            LlmError::new(LlmErrorKind::Http(format!("Failed to read response: {}", e)))
        })?;

        debug!(response_len = response_text.len(), "Received response");

        let parsed: ChatCompletionResponse = serde_json::from_str(&response_text).map_err(|e| {
            error!(error = ?e, response = %response_text, "Failed to parse JSON");
            LlmError::new(LlmErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = parsed
            .first_text()
            .ok_or_else(|| LlmError::new(LlmErrorKind::EmptyResponse))?
            .to_string();

        Ok(GenerateResponse {
            text,
            model: parsed.model().clone(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratagem_core::{GenerateRequestBuilder, Message, Role};
    use stratagem_error::StratagemErrorKind;

    fn request() -> GenerateRequest {
        GenerateRequestBuilder::default()
            .messages(vec![Message::new(Role::System, "ping")])
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_config_error_at_call_time() {
        let client = OpenAiClient::new(None, "gpt-4");
        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err.kind(), StratagemErrorKind::Config(_)));
    }

    #[tokio::test]
    async fn test_blank_key_is_config_error() {
        let client = OpenAiClient::new(Some("   ".to_string()), "gpt-4");
        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err.kind(), StratagemErrorKind::Config(_)));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_llm_error() {
        let client = OpenAiClient::new(Some("sk-test".to_string()), "gpt-4")
            .with_endpoint("http://127.0.0.1:9/v1/chat/completions");
        let err = client.generate(&request()).await.unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_request_model_overrides_default() {
        let client = OpenAiClient::new(None, "gpt-4");
        let req = GenerateRequestBuilder::default()
            .messages(vec![Message::new(Role::System, "ping")])
            .model("gpt-4o-mini")
            .temperature(0.2_f32)
            .build()
            .unwrap();
        let body = client.build_body(&req).unwrap();
        assert_eq!(body.model(), "gpt-4o-mini");
        assert_eq!(*body.temperature(), Some(0.2));

        let body = client.build_body(&request()).unwrap();
        assert_eq!(body.model(), "gpt-4");
    }

    #[test]
    fn test_driver_reports_configured_model() {
        let client = OpenAiClient::new(None, "gpt-4o-mini");
        assert_eq!(client.model_name(), "gpt-4o-mini");
        assert_eq!(client.provider_name(), "openai");
    }
}
