//! Startup orchestration.
//!
//! Subsystems initialize in order: metrics, upstream client and service,
//! signal listener, then the listener socket.

use std::net::{AddrParseError, SocketAddr};

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::spawn_signal_listener;
use crate::observability::metrics;
use crate::upstream::UpstreamError;

/// Fatal errors during startup or while serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid address: {0}")]
    Address(#[from] AddrParseError),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] BuildError),

    #[error("failed to build upstream client: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Start every subsystem and serve until a termination signal arrives.
pub async fn start(config: GatewayConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let bind_address: SocketAddr = config.listener.bind_address.parse()?;
    let server = HttpServer::new(&config)?;

    let shutdown = Shutdown::new();
    spawn_signal_listener(shutdown.clone());

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    server.run(listener, shutdown.subscribe()).await?;
    Ok(())
}
