use std::net::SocketAddr;
use std::path::PathBuf;

use axum::Router;
use tokio_util::sync::CancellationToken;
use tower_http::{services::ServeDir, trace::TraceLayer};
use voxrelay_config::TlsConfig;

/// Bare TLS file server for local development
///
/// Serves every file under `root` with no application routes; path
/// traversal is rejected by `ServeDir`.
pub struct StaticSite {
    root: PathBuf,
    listen_address: SocketAddr,
    tls: TlsConfig,
}

impl StaticSite {
    pub const fn new(root: PathBuf, listen_address: SocketAddr, tls: TlsConfig) -> Self {
        Self {
            root,
            listen_address,
            tls,
        }
    }

    /// Router serving the directory, without the TLS listener
    pub fn router(&self) -> Router {
        Router::new()
            .fallback_service(ServeDir::new(&self.root))
            .layer(TraceLayer::new_for_http())
    }

    /// Serve until `shutdown` is cancelled
    ///
    /// # Errors
    ///
    /// Returns an error if the certificate cannot be loaded or the listener fails
    pub async fn serve(self, shutdown: CancellationToken) -> anyhow::Result<()> {
        tracing::info!(root = %self.root.display(), "serving static files");

        crate::tls::serve_tls(self.listen_address, self.router(), &self.tls, shutdown).await
    }
}
