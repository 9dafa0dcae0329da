//! Client for the third-party creature-data service.
//!
//! # Data Flow
//! ```text
//! PokemonService
//!     → client.rs (GET {base}/pokemon, GET {base}/pokemon/{id})
//!     → status check (404 → NotFound, other non-2xx → Status)
//!     → types.rs (defensive JSON decode, unknown fields ignored)
//! ```
//!
//! # Design Decisions
//! - One shared `reqwest::Client` (connection pooling)
//! - No retries, backoff or caching
//! - Timeouts are the client defaults unless `upstream.timeout_secs` is set;
//!   an elapsed timeout is a `Transport` error like any other
//! - Body is read fully before decoding so IO and decode errors stay distinct

pub mod client;
pub mod types;

use thiserror::Error;

pub use client::UpstreamClient;
pub use types::{PokemonDetail, TypeSlot};

/// Failures talking to the upstream service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Connection, IO or body read failure.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status other than 404.
    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),

    /// Upstream answered 404.
    #[error("upstream resource not found")]
    NotFound,

    /// Body was not the JSON shape we expect.
    #[error("invalid upstream response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    /// Whether this failure means the upstream could not serve the request,
    /// as opposed to serving something we could not understand.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, Self::Decode(_))
    }
}
