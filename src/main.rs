//! Pokemon API gateway.
//!
//! # Architecture Overview
//!
//! ```text
//!   Client ──▶ http (router, validation, status mapping)
//!                 │
//!                 ▼
//!              pokemon::service
//!                 ├──▶ id >= 10001 ──▶ pokemon::store (in memory)
//!                 └──▶ id <= 10000 ──▶ upstream client ──▶ PokeAPI
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use pokemon_gateway::config::{load_config, ConfigOverrides};
use pokemon_gateway::lifecycle;
use pokemon_gateway::observability::logging;

#[derive(Parser)]
#[command(name = "pokemon-gateway")]
#[command(about = "HTTP gateway over PokeAPI with a local record store", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `upstream.base_url`.
    #[arg(long)]
    upstream_url: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        bind_address: cli.bind,
        upstream_url: cli.upstream_url,
    };
    let config = match load_config(cli.config.as_deref(), &overrides) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pokemon-gateway: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        upstream_timeout_secs = ?config.upstream.timeout_secs,
        "pokemon-gateway starting"
    );

    match lifecycle::start(config).await {
        Ok(()) => {
            tracing::info!("Shutdown complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Gateway failed");
            ExitCode::FAILURE
        }
    }
}
