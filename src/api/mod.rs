// src/api/mod.rs

pub mod error;
pub mod model;
pub mod render;

pub use error::FetchError;
pub use model::{PokemonSummary, TypeSummary};
pub use render::{render_pokemon, render_random, render_type};

use model::{PokemonResponse, TypeResponse};
use rand::Rng;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Public PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Species count as of Gen 9. Override with `with_species_count` once it
/// drifts behind the upstream count.
pub const DEFAULT_SPECIES_COUNT: u32 = 1025;

/// Blocking PokeAPI client plus its configuration.
///
/// Cloning is cheap; the underlying HTTP client is reference-counted, so
/// each tool can hold its own handle.
#[derive(Clone)]
pub struct PokeApi {
    client: reqwest::blocking::Client,
    base_url: String,
    species_count: u32,
}

impl PokeApi {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.into(),
            species_count: DEFAULT_SPECIES_COUNT,
        }
    }

    /// Points the client at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').into();
        self
    }

    /// Upper bound of the random-lookup id range.
    pub fn with_species_count(mut self, count: u32) -> Self {
        self.species_count = count;
        self
    }

    pub fn fetch_pokemon(&self, ident: &str) -> Result<PokemonSummary, FetchError> {
        let response: PokemonResponse = self.get_json(&pokemon_path(ident))?;
        Ok(response.into())
    }

    pub fn fetch_type(&self, name: &str) -> Result<TypeSummary, FetchError> {
        let response: TypeResponse = self.get_json(&type_path(name))?;
        Ok(response.into())
    }

    /// Draws a uniform id in `[1, species_count]` and fetches it.
    pub fn fetch_random(&self) -> Result<PokemonSummary, FetchError> {
        let id = rand::thread_rng().gen_range(1..=self.species_count);
        self.fetch_pokemon(&id.to_string())
    }

    /// One GET, no retries, default client timeout. Status errors are
    /// raised before the body is read, so every network-level failure
    /// lands in `FetchError::Transport`.
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");
        let body = self
            .client
            .get(&url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                warn!(%url, error = %e, "request failed");
                FetchError::Transport(e)
            })?;
        serde_json::from_str(&body).map_err(FetchError::Malformed)
    }
}

impl Default for PokeApi {
    fn default() -> Self {
        Self::new()
    }
}

// Identifier normalization: names are lower-cased, numeric ids pass
// through unchanged. Anything else is left for upstream to reject.
fn pokemon_path(ident: &str) -> String {
    format!("pokemon/{}", ident.to_lowercase())
}

fn type_path(name: &str) -> String {
    format!("type/{}", name.to_lowercase())
}
