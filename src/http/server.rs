//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all handlers
//! - Wire up middleware (request ID, tracing, metrics)
//! - Bind the server to a listener and shut down gracefully

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::http::handlers::{create_pokemon, get_pokemon, health, list_pokemons};
use crate::http::request::{make_span, UuidRequestId, X_REQUEST_ID};
use crate::observability::metrics;
use crate::pokemon::PokemonService;
use crate::upstream::{UpstreamClient, UpstreamError};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<PokemonService>,
}

/// Build the Axum router with all middleware layers.
///
/// Layers run outermost first: request ID, trace, response ID propagation,
/// then per-route metrics. There is no gateway-level timeout; a slow upstream
/// is bounded only by the upstream client.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/pokemons", get(list_pokemons).post(create_pokemon))
        .route("/pokemons/{id}", get(get_pokemon))
        .route("/health", get(health))
        .route_layer(middleware::from_fn(metrics::track_requests))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(PropagateRequestIdLayer::new(X_REQUEST_ID)),
        )
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
    service: Arc<PokemonService>,
}

impl HttpServer {
    /// Create a server with a fresh service and upstream client.
    pub fn new(config: &GatewayConfig) -> Result<Self, UpstreamError> {
        let upstream = UpstreamClient::new(&config.upstream)?;
        let service = Arc::new(PokemonService::new(upstream));
        let state = AppState {
            service: service.clone(),
        };

        Ok(Self {
            router: build_router(state),
            service,
        })
    }

    /// Run the server until the shutdown channel fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            upstream = %self.service.upstream_base_url(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("HTTP server draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
