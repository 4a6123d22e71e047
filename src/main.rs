/// ilm: read-only project service
///
/// Main entry point. Parses CLI flags, loads configuration, initializes
/// tracing and runs the HTTP server until SIGINT/SIGTERM.

use clap::Parser;
use ilm::{
    config::{Config, StorageBackend},
    server::start_server,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ilm", version, about = "Serve projects over HTTP")]
struct Cli {
    /// Config file (default: search ., ./config, .. for config.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured storage backend
    #[arg(long, value_enum)]
    backend: Option<StorageBackend>,

    /// Override the configured port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = Config::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.storage.backend = backend;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level.0))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    match &source {
        Some(path) => tracing::info!("Loaded configuration from {}", path.display()),
        None => tracing::warn!("No config file found, using defaults"),
    }
    tracing::info!("Storage backend: {:?}", config.storage.backend);

    start_server(config).await
}
