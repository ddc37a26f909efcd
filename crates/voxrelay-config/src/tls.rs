use std::path::PathBuf;

use serde::Deserialize;

/// TLS configuration for HTTPS
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TlsConfig {
    /// Path to the PEM certificate chain
    pub certificate: PathBuf,
    /// Path to the PEM private key
    pub private_key: PathBuf,
}
