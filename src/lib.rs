//! Pokemon API gateway library.
//!
//! Proxies reads for upstream IDs to PokeAPI and keeps user-created
//! pokemon in an in-memory store.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod pokemon;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use pokemon::PokemonService;
