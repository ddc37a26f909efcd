use std::path::Path;

use url::Url;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if TOML parsing or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise fall back to built-in defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a given file cannot be loaded
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds an unusable value
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_server_config()?;
        self.validate_stt_config()?;
        self.validate_completion_config()?;
        Ok(())
    }

    fn validate_server_config(&self) -> anyhow::Result<()> {
        if self.server.body_limit == Some(0) {
            anyhow::bail!("server.body_limit must be greater than 0");
        }

        if let Some(ref tls) = self.server.tls
            && (tls.certificate.as_os_str().is_empty() || tls.private_key.as_os_str().is_empty())
        {
            anyhow::bail!("server.tls requires both certificate and private_key");
        }

        Ok(())
    }

    fn validate_stt_config(&self) -> anyhow::Result<()> {
        validate_base_url("stt.base_url", &self.stt.base_url)?;

        if self.stt.default_model.trim().is_empty() {
            anyhow::bail!("stt.default_model must not be empty");
        }

        Ok(())
    }

    /// Only checked when the stage is enabled
    fn validate_completion_config(&self) -> anyhow::Result<()> {
        let completion = &self.completion;

        if !completion.enabled {
            return Ok(());
        }

        validate_base_url("completion.base_url", &completion.base_url)?;

        if completion.model.trim().is_empty() {
            anyhow::bail!("completion.model must not be empty");
        }

        if !(0.0..=2.0).contains(&completion.temperature) {
            anyhow::bail!(
                "completion.temperature must be between 0 and 2, got {}",
                completion.temperature
            );
        }

        if completion.max_tokens == 0 {
            anyhow::bail!("completion.max_tokens must be greater than 0");
        }

        Ok(())
    }
}

fn validate_base_url(field: &str, url: &Url) -> anyhow::Result<()> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{field} must use http or https, got '{other}'"),
    }
}
