use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod collector;
mod config;
mod handlers;
mod routes;
mod snmp;

use config::AppConfig;
use handlers::AppState;
use snmp::V2cSessionFactory;

/// Prometheus exporter for APC InRow cooling units, polled over SNMP v2c.
#[derive(Parser, Debug)]
#[command(name = "apc_inrow_exporter", version, about, long_about = None)]
struct Cli {
    /// Address on which to expose metrics.
    #[arg(long = "listen-address", default_value = ":9335", env = "INROW_LISTEN_ADDRESS")]
    listen_address: String,

    /// Path under which to expose metrics.
    #[arg(long = "path", default_value = "/metrics", env = "INROW_METRICS_PATH")]
    metrics_path: String,

    /// Comma-separated list of targets to scrape.
    #[arg(long = "targets", default_value = "", env = "INROW_TARGETS")]
    targets: String,

    /// SNMP community string.
    #[arg(long = "community", default_value = "", env = "INROW_COMMUNITY")]
    community: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = AppConfig::new(
        cli.listen_address,
        cli.metrics_path,
        &cli.targets,
        cli.community,
    );
    let addr = config.socket_addr()?;

    let factory = Arc::new(V2cSessionFactory::new(config.community.as_bytes().to_vec()));
    let state = AppState {
        config: Arc::new(config),
        factory,
    };

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        targets = state.config.targets.len(),
        "starting APC InRow exporter"
    );

    let app = routes::create_router(state.clone());

    tracing::info!(%addr, path = %state.config.metrics_path, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
