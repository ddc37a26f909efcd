#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use args::{Args, Command, ServeArgs, StaticArgs};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use voxrelay_config::{Config, TlsConfig};
use voxrelay_server::{Server, StaticSite};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command.unwrap_or_else(|| Command::Serve(ServeArgs::default())) {
        Command::Serve(args) => serve(args).await,
        Command::Static(args) => serve_static(args).await,
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(args.config.as_deref())?;

    if let Some(listen) = args.listen {
        config.server.listen_address = Some(listen);
    }

    voxrelay_telemetry::init(config.telemetry.as_ref())?;

    tracing::info!(
        config_path = %args.config.as_deref().map_or_else(|| "<defaults>".into(), |p| p.display().to_string()),
        "starting voxrelay"
    );

    let server = Server::new(config)?;

    server.serve(shutdown_token()).await?;

    tracing::info!("voxrelay stopped");
    Ok(())
}

async fn serve_static(args: StaticArgs) -> anyhow::Result<()> {
    voxrelay_telemetry::init(None)?;

    let tls = TlsConfig {
        certificate: args.certificate,
        private_key: args.private_key,
    };

    StaticSite::new(args.root, args.listen, tls).serve(shutdown_token()).await?;

    tracing::info!("static server stopped");
    Ok(())
}

/// Token cancelled on the first shutdown signal
fn shutdown_token() -> CancellationToken {
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    shutdown
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
