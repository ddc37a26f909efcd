use serde::Deserialize;
use url::Url;

/// Optional second stage: send the transcript to a chat-completion API
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chain the completion stage after transcription
    #[serde(default)]
    pub enabled: bool,
    /// Base URL of the OpenAI-compatible chat API
    #[serde(default = "crate::default_upstream_url")]
    pub base_url: Url,
    /// Chat model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// System prompt sent ahead of the transcript
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Return the transcript in the error body when the completion fails
    #[serde(default)]
    pub keep_transcript_on_failure: bool,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: crate::default_upstream_url(),
            model: default_model(),
            system_prompt: default_system_prompt(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            keep_transcript_on_failure: false,
        }
    }
}

fn default_model() -> String {
    "llama3-8b-8192".to_string()
}

fn default_system_prompt() -> String {
    "You are a helpful assistant. Keep your responses concise.".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_temperature() -> f32 {
    0.7
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_tokens() -> u32 {
    1000
}
