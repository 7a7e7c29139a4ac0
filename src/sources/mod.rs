//! Remote catalog access: query definition, response cache, and GraphQL client.

mod cache;
mod client;
mod query;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use cache::{DEFAULT_CACHE_CAPACITY, ResponseCache};
pub use client::{CatalogClient, CatalogSource, DEFAULT_ENDPOINT};
pub use query::{CHARACTERS_QUERY, GraphqlRequest, QueryVariables, decode_characters};
