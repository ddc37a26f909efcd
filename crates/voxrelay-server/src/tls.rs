use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum_server::{Handle, tls_rustls::RustlsConfig};
use tokio_util::sync::CancellationToken;
use voxrelay_config::TlsConfig;

/// Time given to in-flight requests once shutdown starts
const GRACEFUL_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

/// Load the PEM certificate and key named in `tls`
///
/// # Errors
///
/// Returns an error if either file cannot be read or parsed
pub async fn load_rustls_config(tls: &TlsConfig) -> anyhow::Result<RustlsConfig> {
    // reqwest and axum-server pull in different rustls backends; pin one for the process
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    RustlsConfig::from_pem_file(&tls.certificate, &tls.private_key)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "failed to load TLS certificate {} / key {}: {e}",
                tls.certificate.display(),
                tls.private_key.display()
            )
        })
}

/// Serve `router` over TLS until `shutdown` is cancelled
///
/// # Errors
///
/// Returns an error if the certificate cannot be loaded or the listener fails
pub async fn serve_tls(
    listen_address: SocketAddr,
    router: Router,
    tls: &TlsConfig,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let rustls_config = load_rustls_config(tls).await?;

    let handle = Handle::new();
    let shutdown_handle = handle.clone();

    tokio::spawn(async move {
        shutdown.cancelled().await;
        tracing::info!("graceful shutdown initiated");
        shutdown_handle.graceful_shutdown(Some(GRACEFUL_SHUTDOWN_TIMEOUT));
    });

    tracing::info!(%listen_address, "server listening (tls)");

    axum_server::bind_rustls(listen_address, rustls_config)
        .handle(handle)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
