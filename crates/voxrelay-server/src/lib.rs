#![allow(clippy::must_use_candidate)]

mod assets;
mod error;
mod pipeline;
mod static_site;
mod tls;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Json, Router, extract::DefaultBodyLimit, extract::State, routing::post};
use stt::ExtractMultipart;
use tower_http::trace::TraceLayer;
use voxrelay_config::{Config, TlsConfig};

pub use error::{PartialTranscript, RelayError};
pub use pipeline::{Pipeline, RelayResponse};
pub use static_site::StaticSite;

/// Assembled front door: UI routes plus the `/transcribe` relay
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
    tls: Option<TlsConfig>,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let listen_address = config.server.listen_address();
        let pipeline = Arc::new(Pipeline::from_config(&config));

        tracing::info!(
            stt_model = %config.stt.default_model,
            completion = pipeline.has_completion(),
            "relay pipeline configured"
        );

        let relay = Router::new()
            .route("/transcribe", post(transcribe))
            .layer(DefaultBodyLimit::max(config.server.body_limit()))
            .with_state(pipeline);

        let router = Router::new()
            .merge(assets::asset_router(config.assets.root))
            .merge(relay)
            .layer(TraceLayer::new_for_http());

        Ok(Self {
            router,
            listen_address,
            tls: config.server.tls,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests, over TLS when configured
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener, loading TLS material, or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        if let Some(ref tls) = self.tls {
            return tls::serve_tls(self.listen_address, self.router, tls, shutdown).await;
        }

        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Handle `/transcribe`: validate the form, then run the pipeline
async fn transcribe(
    State(pipeline): State<Arc<Pipeline>>,
    ExtractMultipart(request): ExtractMultipart,
) -> Result<Json<RelayResponse>, RelayError> {
    tracing::debug!(bytes = request.audio.bytes.len(), "transcribe handler called");

    let response = pipeline.run(request).await?;

    Ok(Json(response))
}
