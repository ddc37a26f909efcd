use reqwest::{Client, multipart};
use secrecy::{ExposeSecret, SecretString};
use url::Url;
use voxrelay_config::SttConfig;
use voxrelay_core::upstream_error_message;

use crate::{
    error::{Result, SttError},
    types::{Transcription, TranscriptionRequest},
};

/// Filename presented to the upstream for every upload
const UPLOAD_FILENAME: &str = "audio.wav";

/// Fixed decoding parameters: deterministic output, structured response
const RESPONSE_FORMAT: &str = "json";
const TEMPERATURE: &str = "0";

/// Transcription stage: applies defaults and runs one upstream call per request
#[derive(Debug, Clone)]
pub struct Transcriber {
    base_url: Url,
    default_model: String,
    default_language: String,
}

impl Transcriber {
    pub fn from_config(config: &SttConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            default_model: config.default_model.clone(),
            default_language: config.default_language.clone(),
        }
    }

    /// Transcribe the uploaded audio
    ///
    /// Builds a fresh [`WhisperClient`] bound to the caller's key; nothing
    /// is shared between requests.
    pub async fn transcribe(&self, request: TranscriptionRequest) -> Result<Transcription> {
        let TranscriptionRequest {
            audio,
            model,
            language,
            api_key,
        } = request;

        let model = model.unwrap_or_else(|| self.default_model.clone());
        let language = language.unwrap_or_else(|| self.default_language.clone());

        let client = WhisperClient::new(&self.base_url, api_key)?;
        client.transcribe(audio.bytes, &model, &language).await
    }
}

/// Client for an OpenAI-compatible `/audio/transcriptions` endpoint
pub struct WhisperClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
}

#[derive(serde::Deserialize)]
struct WhisperResponse {
    text: String,
}

impl WhisperClient {
    pub fn new(base_url: &Url, api_key: SecretString) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SttError::InternalError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: transcriptions_url(base_url),
            api_key,
        })
    }

    /// Submit raw audio bytes and return the transcript
    pub async fn transcribe(&self, audio: Vec<u8>, model: &str, language: &str) -> Result<Transcription> {
        tracing::debug!(bytes = audio.len(), model, language, "sending transcription request");

        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(audio).file_name(UPLOAD_FILENAME))
            .text("model", model.to_string())
            .text("language", language.to_string())
            .text("response_format", RESPONSE_FORMAT)
            .text("temperature", TEMPERATURE);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "transcription request failed");
                SttError::ConnectionError(format!("Failed to send request to transcription API: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = upstream_error_message(&error_text);

            tracing::error!(%status, "transcription API error: {message}");

            return Err(SttError::ProviderApiError {
                status: status.as_u16(),
                message,
            });
        }

        let result: WhisperResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "failed to parse transcription response");
            SttError::MalformedResponse(e.to_string())
        })?;

        tracing::debug!(chars = result.text.len(), "transcription complete");

        Ok(Transcription { text: result.text })
    }
}

fn transcriptions_url(base_url: &Url) -> String {
    let base = base_url.as_str().trim_end_matches('/');
    format!("{base}/audio/transcriptions")
}
