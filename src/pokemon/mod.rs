//! Pokemon domain: records, payload validation, the local store and the
//! service that dispatches between local records and the upstream API.
//!
//! # ID Space
//! ```text
//! 1 ..= 10000   upstream-owned, fetched live, never stored
//! 10001 ..      local, created through this gateway, kept in memory
//! ```

pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use model::{NamedResource, NewPokemon, Pokemon, PokemonList};
pub use service::PokemonService;
pub use store::{LocalStore, FIRST_LOCAL_ID};
pub use validation::FieldError;
