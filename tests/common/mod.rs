//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderMap, Request, StatusCode, Uri};
use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower::ServiceExt;

use pokemon_gateway::config::GatewayConfig;
use pokemon_gateway::http::{build_router, AppState};
use pokemon_gateway::upstream::UpstreamClient;
use pokemon_gateway::PokemonService;

/// A running fake upstream.
pub struct MockUpstream {
    pub addr: SocketAddr,
    /// Path and query of every request received, in order.
    pub hits: Arc<Mutex<Vec<String>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }

    pub fn hits(&self) -> Vec<String> {
        self.hits.lock().unwrap().clone()
    }
}

/// Start a programmable upstream on an ephemeral port.
pub async fn start_programmable_upstream<F>(respond: F) -> MockUpstream
where
    F: Fn(&Uri) -> (StatusCode, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let respond = Arc::new(respond);

    let recorded = hits.clone();
    let app = Router::new().fallback(move |uri: Uri| {
        let respond = respond.clone();
        let recorded = recorded.clone();
        async move {
            recorded.lock().unwrap().push(uri.to_string());
            let (status, body) = respond(&uri);
            (status, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, hits }
}

/// Upstream that answers every request with `body` after `delay`.
pub async fn start_slow_upstream(delay: Duration, body: Value) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(Mutex::new(Vec::new()));

    let recorded = hits.clone();
    let app = Router::new().fallback(move |uri: Uri| {
        let recorded = recorded.clone();
        let body = body.to_string();
        async move {
            recorded.lock().unwrap().push(uri.to_string());
            tokio::time::sleep(delay).await;
            (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body)
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, hits }
}

/// Upstream that serves a fixed list page and a table of detail documents.
pub async fn start_pokeapi(list: Value, details: HashMap<i64, Value>) -> MockUpstream {
    start_programmable_upstream(move |uri| {
        let path = uri.path().trim_end_matches('/');
        if path == "/api/v2/pokemon" {
            return (StatusCode::OK, list.to_string());
        }
        let detail = path
            .strip_prefix("/api/v2/pokemon/")
            .and_then(|id| id.parse::<i64>().ok())
            .and_then(|id| details.get(&id));
        match detail {
            Some(doc) => (StatusCode::OK, doc.to_string()),
            None => (StatusCode::NOT_FOUND, "Not Found".to_string()),
        }
    })
    .await
}

/// An address with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v2")
}

pub fn config_for(base_url: &str) -> GatewayConfig {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = base_url.to_string();
    config
}

/// Router and service wired to the given upstream.
pub fn gateway(base_url: &str) -> (Router, Arc<PokemonService>) {
    gateway_with(&config_for(base_url))
}

/// Router and service built from a full config.
pub fn gateway_with(config: &GatewayConfig) -> (Router, Arc<PokemonService>) {
    let upstream = UpstreamClient::new(&config.upstream).unwrap();
    let service = Arc::new(PokemonService::new(upstream));
    let router = build_router(AppState {
        service: service.clone(),
    });
    (router, service)
}

/// Drive one request through the router without a socket.
pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    (status, headers, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn list_response() -> Value {
    json!({
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"},
            {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/"}
        ]
    })
}

pub fn bulbasaur() -> Value {
    let sprites = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "is_default": true,
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ],
        "sprites": {
            "front_default": format!("{sprites}/1.png"),
            "back_default": format!("{sprites}/back/1.png")
        }
    })
}

pub fn testmon() -> Value {
    json!({
        "name": "testmon",
        "height": 15,
        "weight": 250,
        "types": ["fire", "flying"],
        "base_experience": 180
    })
}
