//! Pokedex tools: blocking PokeAPI lookups exposed as agent tools.
//!
//! The `api` module holds the structured core (client, typed records,
//! text rendering); the `tools` module adapts it to the always-returns-text
//! tool boundary; `context` is the registry tools are invoked through.

pub mod api;
pub mod context;
pub mod tools;
