#![allow(clippy::must_use_candidate)]

pub mod assets;
pub mod completion;
mod loader;
pub mod server;
pub mod stt;
pub mod telemetry;
pub mod tls;

use serde::Deserialize;

pub use assets::*;
pub use completion::*;
pub use server::*;
pub use stt::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use tls::*;

/// Default upstream for both relay stages (Groq's OpenAI-compatible API)
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.groq.com/openai/v1";

/// Top-level voxrelay configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Static asset configuration for the browser UI
    #[serde(default)]
    pub assets: AssetsConfig,
    /// Transcription stage configuration
    #[serde(default)]
    pub stt: SttConfig,
    /// Optional completion stage configuration
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}

/// # Panics
///
/// Panics if the hardcoded default upstream URL is invalid (should never happen).
pub(crate) fn default_upstream_url() -> url::Url {
    url::Url::parse(DEFAULT_UPSTREAM_URL).expect("valid default URL")
}
