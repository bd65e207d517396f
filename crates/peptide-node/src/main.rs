//! Peptide Node - research catalog HTTP backend.

use anyhow::Context;
use clap::Parser;
use peptide_node::api::{create_router, AppState};
use peptide_node::config::{ConfigOverrides, NodeConfig};
use peptide_node::observability::{init_logging, LogFormat};
use peptide_store::StoreHandle;
use std::path::PathBuf;

/// Peptide Node - research catalog HTTP backend
#[derive(Parser, Debug)]
#[command(name = "peptide-node")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    port: Option<u16>,

    /// Document store connection string (memory://, rocksdb://<path>)
    #[arg(long)]
    database_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (pretty, json)
    #[arg(long)]
    log_format: Option<String>,
}

impl Args {
    fn overrides(self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host,
            port: self.port,
            database_url: self.database_url,
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = NodeConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(args.overrides());

    init_logging(&config.log_level, LogFormat::parse(&config.log_format));

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting peptide node");

    let store = StoreHandle::connect(config.database_url(), &config.database_name);
    let state = AppState::new(store, config.database_url_set());
    let app = create_router(state);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    tracing::info!(addr = %addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Peptide node stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
