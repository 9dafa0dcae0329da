//! Records exchanged with clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A pokemon as returned by this gateway, whether upstream-sourced or local.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    /// Type names in slot order.
    pub types: Vec<String>,
    pub base_experience: Option<i64>,
    /// Raw sprite object from upstream; always `None` for local records.
    pub sprites: Option<Value>,
}

/// Body of a create request. Constraints live in [`crate::pokemon::validation`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPokemon {
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub types: Vec<String>,
    #[serde(default)]
    pub base_experience: Option<i64>,
}

/// A `{name, url}` reference as used by upstream list results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of the upstream listing, passed through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonList {
    pub count: i64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}
