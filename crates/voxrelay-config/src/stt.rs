use serde::Deserialize;
use url::Url;

/// Transcription stage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SttConfig {
    /// Base URL of the OpenAI-compatible transcription API
    #[serde(default = "crate::default_upstream_url")]
    pub base_url: Url,
    /// Model used when the form omits `model`
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Language used when the form omits `language`
    #[serde(default = "default_language")]
    pub default_language: String,
}

impl Default for SttConfig {
    fn default() -> Self {
        Self {
            base_url: crate::default_upstream_url(),
            default_model: default_model(),
            default_language: default_language(),
        }
    }
}

fn default_model() -> String {
    "whisper-large-v3-turbo".to_string()
}

fn default_language() -> String {
    "en".to_string()
}
