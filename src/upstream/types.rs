//! Upstream response shapes.
//!
//! Only the fields the gateway reads are declared; serde ignores the rest.

use serde::Deserialize;
use serde_json::Value;

use crate::pokemon::model::{NamedResource, Pokemon};

/// Subset of the upstream `/pokemon/{id}` document.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonDetail {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub base_experience: Option<i64>,
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Option<Value>,
}

/// A `{slot, type: {name, url}}` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl From<PokemonDetail> for Pokemon {
    fn from(detail: PokemonDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            height: detail.height,
            weight: detail.weight,
            // Upstream order is kept; slots are not re-sorted.
            types: detail.types.into_iter().map(|t| t.kind.name).collect(),
            base_experience: detail.base_experience,
            sprites: detail.sprites,
        }
    }
}
