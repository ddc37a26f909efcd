use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use voxrelay_config::CompletionConfig;
use voxrelay_core::upstream_error_message;

use crate::{
    error::LlmError,
    protocol::{ChatMessage, ChatRequest, ChatResponse},
};

/// Reply generated by the chat API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
}

/// Completion stage settings; builds a [`ChatClient`] per call
#[derive(Debug, Clone)]
pub struct Completer {
    base_url: Url,
    model: String,
    system_prompt: String,
    temperature: f32,
    max_tokens: u32,
}

impl Completer {
    pub fn from_config(config: &CompletionConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            system_prompt: config.system_prompt.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        }
    }

    /// Ask the chat API to respond to `transcript`, authenticating with `api_key`
    pub async fn complete(&self, transcript: &str, api_key: SecretString) -> Result<Completion, LlmError> {
        let client = ChatClient::new(&self.base_url, api_key)?;

        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &self.system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: transcript,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        };

        client.send(&request).await
    }
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint
pub(crate) struct ChatClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

impl ChatClient {
    fn new(base_url: &Url, api_key: SecretString) -> Result<Self, LlmError> {
        let client = Client::builder()
            .build()
            .map_err(|e| LlmError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: completions_url(base_url),
            api_key,
        })
    }

    async fn send(&self, request: &ChatRequest<'_>) -> Result<Completion, LlmError> {
        tracing::debug!(model = request.model, max_tokens = request.max_tokens, "sending completion request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "completion request failed");
                LlmError::Connection(format!("Failed to send request to completion API: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = upstream_error_message(&error_text);

            tracing::error!(%status, "completion API error: {message}");

            return Err(LlmError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse completion response");
            LlmError::MalformedResponse(e.to_string())
        })?;

        let text = body.into_text();
        tracing::debug!(chars = text.len(), "completion finished");

        Ok(Completion { text })
    }
}

fn completions_url(base_url: &Url) -> String {
    let base = base_url.as_str().trim_end_matches('/');
    format!("{base}/chat/completions")
}
