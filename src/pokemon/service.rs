//! Business logic for the `/pokemons` API.
//!
//! # Responsibilities
//! - Pass upstream list pages through untouched
//! - Dispatch single lookups by ID range: local store or upstream
//! - Reshape upstream detail documents into [`Pokemon`]
//! - Create local records

use crate::observability::metrics;
use crate::pokemon::model::{NewPokemon, Pokemon, PokemonList};
use crate::pokemon::store::{LocalStore, FIRST_LOCAL_ID};
use crate::upstream::{UpstreamClient, UpstreamError};

/// Owns the upstream client and the local store.
#[derive(Debug)]
pub struct PokemonService {
    upstream: UpstreamClient,
    store: LocalStore,
}

impl PokemonService {
    /// Create a service with an empty local store.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream,
            store: LocalStore::new(),
        }
    }

    /// One page of the upstream listing. Local records are not merged in.
    pub async fn list_all(&self, limit: i64, offset: i64) -> Result<PokemonList, UpstreamError> {
        self.upstream.list_pokemon(limit, offset).await
    }

    /// Look a pokemon up by ID.
    ///
    /// IDs from [`FIRST_LOCAL_ID`] upwards are answered from the local store
    /// only; lower IDs go to the upstream and never touch the store. A miss
    /// on either side, including an upstream 404, is `Ok(None)`.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Pokemon>, UpstreamError> {
        if id >= FIRST_LOCAL_ID {
            return Ok(self.store.get(id));
        }

        match self.upstream.get_pokemon(id).await {
            Ok(detail) => Ok(Some(detail.into())),
            Err(UpstreamError::NotFound) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Store a new local record. Expects an already validated payload.
    pub fn create(&self, payload: NewPokemon) -> Pokemon {
        let created = self.store.insert_with(|id| Pokemon {
            id,
            name: payload.name,
            height: payload.height,
            weight: payload.weight,
            types: payload.types,
            base_experience: payload.base_experience,
            sprites: None,
        });

        metrics::record_local_records(self.store.len());
        tracing::info!(id = created.id, name = %created.name, "Created local pokemon");
        created
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn upstream_base_url(&self) -> &str {
        self.upstream.base_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;

    /// A service whose upstream refuses connections.
    fn offline_service() -> PokemonService {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = UpstreamConfig {
            base_url: format!("http://{addr}/api/v2"),
            ..UpstreamConfig::default()
        };
        PokemonService::new(UpstreamClient::new(&config).unwrap())
    }

    fn testmon() -> NewPokemon {
        NewPokemon {
            name: "testmon".into(),
            height: 15,
            weight: 250,
            types: vec!["fire".into(), "flying".into()],
            base_experience: Some(180),
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let service = offline_service();

        let first = service.create(testmon());
        let mut second_payload = testmon();
        second_payload.name = "testmon2".into();
        let second = service.create(second_payload);

        assert_eq!(first.id, 10_001);
        assert_eq!(second.id, 10_002);
        assert_eq!(first.types, vec!["fire", "flying"]);
        assert_eq!(first.base_experience, Some(180));
        assert!(first.sprites.is_none());
        assert_eq!(service.store().len(), 2);
    }

    #[tokio::test]
    async fn test_local_round_trip_without_upstream() {
        let service = offline_service();
        let created = service.create(testmon());

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_local_miss_is_none() {
        let service = offline_service();
        assert_eq!(service.get_by_id(10_001).await.unwrap(), None);
        assert_eq!(service.get_by_id(99_999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upstream_range_leaves_store_alone() {
        let service = offline_service();
        service.create(testmon());

        let err = service.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));

        let err = service.get_by_id(10_000).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport(_)));

        assert_eq!(service.store().len(), 1);
        assert_eq!(service.store().next_id(), 10_002);
    }
}
