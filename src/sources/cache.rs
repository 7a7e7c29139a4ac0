//! Bounded response cache keyed by serialized request variables.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::state::CharacterPage;

use super::QueryVariables;

/// Number of pages kept when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Least-recently-used store of successful pages.
///
/// Owned by the [`CatalogClient`](super::CatalogClient) it was handed to; there
/// is no process-wide instance.
#[derive(Debug)]
pub struct ResponseCache {
    /// Pages keyed by [`QueryVariables::cache_key`].
    entries: LruCache<String, CharacterPage>,
}

impl ResponseCache {
    /// What: Create a cache holding at most `capacity` pages.
    ///
    /// Details:
    /// - A capacity of zero is bumped to one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
        }
    }

    /// Cached page for these variables, refreshing its recency.
    pub fn get(&mut self, vars: &QueryVariables) -> Option<CharacterPage> {
        self.entries.get(&vars.cache_key()).cloned()
    }

    /// Store a page, evicting the least recently used entry when full.
    pub fn insert(&mut self, vars: &QueryVariables, page: CharacterPage) {
        if let Some((evicted, _)) = self.entries.push(vars.cache_key(), page)
            && evicted != vars.cache_key()
        {
            tracing::debug!(key = %evicted, "evicted cached page");
        }
    }

    /// Number of cached pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}
