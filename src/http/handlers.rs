//! Route handlers for `/pokemons` and `/health`.
//!
//! Handlers validate input, call [`PokemonService`](crate::pokemon::PokemonService)
//! and leave status mapping to [`ApiError`].

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::pokemon::validation::{parse_list_params, validate_new_pokemon};
use crate::pokemon::{NewPokemon, Pokemon, PokemonList};

/// Query string of `GET /pokemons`, kept raw so a bad value can be reported
/// under its own field name.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub message: &'static str,
}

/// `GET /pokemons?limit=&offset=`
pub async fn list_pokemons(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PokemonList>, ApiError> {
    let Query(params) = params?;
    let (limit, offset) = parse_list_params(params.limit.as_deref(), params.offset.as_deref())
        .map_err(ApiError::Validation)?;

    let page = state
        .service
        .list_all(limit, offset)
        .await
        .map_err(|e| ApiError::from_upstream("pokemons", e))?;

    Ok(Json(page))
}

/// `GET /pokemons/{id}`
pub async fn get_pokemon(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Pokemon>, ApiError> {
    let Path(id) = id?;

    state
        .service
        .get_by_id(id)
        .await
        .map_err(|e| ApiError::from_upstream("pokemon", e))?
        .map(Json)
        .ok_or_else(|| ApiError::pokemon_not_found(id))
}

/// `POST /pokemons`
pub async fn create_pokemon(
    State(state): State<AppState>,
    payload: Result<Json<NewPokemon>, JsonRejection>,
) -> Result<(StatusCode, Json<Pokemon>), ApiError> {
    let Json(payload) = payload?;
    validate_new_pokemon(&payload).map_err(ApiError::Validation)?;

    let created = state.service.create(payload);
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        message: "Pokemon API is running",
    })
}
