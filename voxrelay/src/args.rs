use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// voxrelay speech relay
#[derive(Debug, Parser)]
#[command(name = "voxrelay", about = "Relay browser audio uploads to a hosted speech-to-text API")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the relay server (default)
    Serve(ServeArgs),
    /// Serve a directory over TLS for local development
    Static(StaticArgs),
}

#[derive(Debug, Default, ClapArgs)]
pub struct ServeArgs {
    /// Path to configuration file; built-in defaults apply when absent
    #[arg(short, long, env = "VOXRELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "VOXRELAY_LISTEN")]
    pub listen: Option<SocketAddr>,
}

#[derive(Debug, ClapArgs)]
pub struct StaticArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:4443")]
    pub listen: SocketAddr,

    /// Directory to serve
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// PEM certificate chain
    #[arg(long, default_value = "cert.pem")]
    pub certificate: PathBuf,

    /// PEM private key
    #[arg(long, default_value = "key.pem")]
    pub private_key: PathBuf,
}
