//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;
use std::path::Path;

use voxrelay_config::{AssetsConfig, CompletionConfig, Config, ServerConfig, SttConfig};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                assets: AssetsConfig::default(),
                stt: SttConfig::default(),
                completion: CompletionConfig::default(),
                telemetry: None,
            },
        }
    }

    /// Point the transcription stage at a mock backend
    pub fn with_stt_upstream(mut self, base_url: &str) -> Self {
        self.config.stt.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Enable the completion stage against a mock backend
    pub fn with_completion_upstream(mut self, base_url: &str) -> Self {
        self.config.completion.enabled = true;
        self.config.completion.base_url = base_url.parse().expect("valid URL");
        self
    }

    /// Return the transcript alongside completion errors
    pub fn keep_transcript_on_failure(mut self) -> Self {
        self.config.completion.keep_transcript_on_failure = true;
        self
    }

    /// Serve UI assets from `root`
    pub fn with_assets(mut self, root: &Path) -> Self {
        self.config.assets.root = root.to_path_buf();
        self
    }

    /// Limit request bodies to `bytes`
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.config.server.body_limit = Some(bytes);
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
