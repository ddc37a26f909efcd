use std::net::SocketAddr;

use serde::Deserialize;

use crate::tls::TlsConfig;

/// Default listen address, all interfaces on port 5000
pub const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED), 5000);

/// Body limit for audio uploads (32 MiB)
pub const DEFAULT_BODY_LIMIT: usize = 32 << 20;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub listen_address: Option<SocketAddr>,
    #[serde(default)]
    pub tls: Option<TlsConfig>,
    /// Maximum accepted request body size in bytes
    #[serde(default)]
    pub body_limit: Option<usize>,
}

impl ServerConfig {
    pub fn listen_address(&self) -> SocketAddr {
        self.listen_address.unwrap_or(DEFAULT_LISTEN_ADDRESS)
    }

    pub fn body_limit(&self) -> usize {
        self.body_limit.unwrap_or(DEFAULT_BODY_LIMIT)
    }
}
