//! GraphQL client for the character catalog.

use std::sync::Mutex;
use std::time::Duration;

use futures::future::BoxFuture;

use crate::state::CharacterPage;

use super::{GraphqlRequest, QueryVariables, ResponseCache, Result, decode_characters};

/// Public endpoint of the character catalog.
pub const DEFAULT_ENDPOINT: &str = "https://rickandmortyapi.com/graphql";

/// What: Anything that can produce a page of characters for a set of variables.
///
/// Details:
/// - The fetch worker depends on this trait rather than on `CatalogClient` directly,
///   so tests can script responses without a network.
pub trait CatalogSource: Send + Sync {
    /// Fetch one page; any failure is reported as a single error kind.
    fn fetch_page<'a>(&'a self, vars: &'a QueryVariables) -> BoxFuture<'a, Result<CharacterPage>>;
}

/// HTTP client bound to one GraphQL endpoint, with its own response cache.
#[derive(Debug)]
pub struct CatalogClient {
    /// Pooled HTTP client.
    http: reqwest::Client,
    /// GraphQL endpoint URL.
    endpoint: String,
    /// Successful pages keyed by request variables.
    cache: Mutex<ResponseCache>,
}

impl CatalogClient {
    /// What: Build a client for `endpoint`.
    ///
    /// Inputs:
    /// - `endpoint`: GraphQL URL
    /// - `timeout`: Total per-request timeout
    /// - `cache`: Cache instance owned by this client from now on
    ///
    /// # Errors
    /// - Returns `Err` when the HTTP client cannot be constructed (TLS backend failure)
    pub fn new(endpoint: impl Into<String>, timeout: Duration, cache: ResponseCache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .timeout(timeout)
            .user_agent(format!("charbrowse/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            cache: Mutex::new(cache),
        })
    }

    /// Endpoint this client talks to.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Number of pages currently cached.
    #[must_use]
    pub fn cached_pages(&self) -> usize {
        self.cache.lock().map_or(0, |c| c.len())
    }

    /// What: Return a cached page without touching the network.
    fn cached(&self, vars: &QueryVariables) -> Option<CharacterPage> {
        self.cache.lock().ok().and_then(|mut c| c.get(vars))
    }

    /// What: Store a successful page.
    fn remember(&self, vars: &QueryVariables, page: CharacterPage) {
        if let Ok(mut c) = self.cache.lock() {
            c.insert(vars, page);
        }
    }

    /// What: Fetch one page of characters, cache first.
    ///
    /// Inputs:
    /// - `vars`: Page number and filters
    ///
    /// Output:
    /// - `Ok(CharacterPage)` from the cache or the network
    ///
    /// # Errors
    /// - Returns `Err` on transport failure or timeout
    /// - Returns `Err` when the server answers with a non-success HTTP status
    /// - Returns `Err` when the body is malformed or carries GraphQL errors
    ///
    /// Details:
    /// - Only successful pages are cached; failures are retried on the next request.
    pub async fn fetch_characters(&self, vars: &QueryVariables) -> Result<CharacterPage> {
        if let Some(page) = self.cached(vars) {
            tracing::debug!(page = vars.page, "serving page from cache");
            return Ok(page);
        }
        tracing::debug!(
            endpoint = %self.endpoint,
            page = vars.page,
            status = %vars.status,
            species = %vars.species,
            "requesting characters"
        );
        let resp = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest::characters(vars))
            .send()
            .await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(format!("catalog returned HTTP {status}").into());
        }
        let page = decode_characters(&body)?;
        self.remember(vars, page.clone());
        Ok(page)
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_page<'a>(&'a self, vars: &'a QueryVariables) -> BoxFuture<'a, Result<CharacterPage>> {
        Box::pin(self.fetch_characters(vars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PageInfo;

    #[tokio::test]
    /// What: A cached page is served without any network round trip.
    ///
    /// Details:
    /// - The endpoint points at a closed local port, so a network attempt would fail.
    async fn cache_hit_skips_network() {
        let vars = QueryVariables {
            page: 3,
            status: "alive".into(),
            species: String::new(),
        };
        let mut cache = ResponseCache::new(4);
        let cached = CharacterPage {
            info: PageInfo {
                pages: Some(5),
                next: Some(4),
                prev: Some(2),
            },
            results: Vec::new(),
        };
        cache.insert(&vars, cached.clone());
        let client = CatalogClient::new("http://127.0.0.1:9/graphql", Duration::from_secs(1), cache)
            .expect("client builds");
        let page = client.fetch_page(&vars).await.expect("served from cache");
        assert_eq!(page, cached);
        assert_eq!(client.cached_pages(), 1);
    }

    #[tokio::test]
    /// What: Transport failures surface as errors and are not cached.
    async fn unreachable_endpoint_fails_without_caching() {
        let client = CatalogClient::new(
            "http://127.0.0.1:9/graphql",
            Duration::from_secs(2),
            ResponseCache::new(4),
        )
        .expect("client builds");
        let vars = QueryVariables {
            page: 1,
            ..QueryVariables::default()
        };
        assert!(client.fetch_page(&vars).await.is_err());
        assert_eq!(client.cached_pages(), 0);
        assert_eq!(client.endpoint(), "http://127.0.0.1:9/graphql");
    }
}
