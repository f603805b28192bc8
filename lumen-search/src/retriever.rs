//! Source retriever: ordered search-provider fallback with offline default.
//!
//! Tries SerpAPI (only when a key is configured), then DuckDuckGo. The
//! first provider to respond successfully wins, even with an empty list.
//! When every provider errors, a deterministic offline bundle is returned,
//! so retrieval never fails.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::config::RetrievalConfig;
use crate::engines::{offline, DuckDuckGoEngine, SerpApiEngine};
use crate::provider::{FallbackChain, Provider};
use crate::types::{SearchQuery, Source};

/// Maximum number of cached result sets.
const MAX_CACHE_ENTRIES: u64 = 100;

/// Search provider handle accepted by [`SourceRetriever::with_providers`].
pub type SearchProvider = Arc<dyn Provider<SearchQuery, Vec<Source>>>;

/// Composite cache key: normalised query + requested count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    query: String,
    count: usize,
}

impl CacheKey {
    fn new(query: &str, count: usize) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            count,
        }
    }
}

/// Retrieves candidate sources for a query.
///
/// Holds only immutable configuration and an instance-owned result cache;
/// share it behind an [`Arc`] across concurrent pipelines.
pub struct SourceRetriever {
    chain: FallbackChain<SearchQuery, Vec<Source>>,
    cache: Option<Cache<CacheKey, Vec<Source>>>,
}

impl SourceRetriever {
    /// Build the standard provider chain from `config`.
    ///
    /// The SerpAPI tier is included only when a non-blank key is set.
    pub fn new(config: &RetrievalConfig) -> Self {
        let mut providers: Vec<SearchProvider> = Vec::new();
        if let Some(key) = config.serpapi_key() {
            providers.push(Arc::new(SerpApiEngine::new(key, config.clone())));
        }
        providers.push(Arc::new(DuckDuckGoEngine::new(config.clone())));

        Self::with_providers(providers, config.cache_ttl_seconds)
    }

    /// Build a retriever over an explicit provider list.
    ///
    /// `cache_ttl_seconds == 0` disables caching.
    pub fn with_providers(providers: Vec<SearchProvider>, cache_ttl_seconds: u64) -> Self {
        let cache = (cache_ttl_seconds > 0).then(|| {
            Cache::builder()
                .max_capacity(MAX_CACHE_ENTRIES)
                .time_to_live(Duration::from_secs(cache_ttl_seconds))
                .build()
        });
        Self {
            chain: FallbackChain::new(providers),
            cache,
        }
    }

    /// Provider names in try order (the offline tier is implicit).
    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.names()
    }

    /// Retrieve up to `count` sources for `query`.
    ///
    /// Never fails: provider errors fall through to the next tier and, when
    /// all fail, the offline bundle for the query is returned. Only
    /// network results are cached.
    pub async fn retrieve(&self, query: &str, count: usize) -> Vec<Source> {
        let key = CacheKey::new(query, count);
        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get(&key).await {
                tracing::debug!(count = cached.len(), "retrieval cache hit");
                return cached;
            }
        }

        let request = SearchQuery::new(query, count);
        match self.chain.run(&request).await {
            Ok((provider, mut sources)) => {
                sources.truncate(count);
                tracing::debug!(provider = %provider, count = sources.len(), "sources retrieved");
                if let Some(cache) = &self.cache {
                    cache.insert(key, sources.clone()).await;
                }
                sources
            }
            Err(err) => {
                tracing::warn!(error = %err, "all search providers failed, using offline sources");
                offline::fallback_sources(query, count)
            }
        }
    }
}

impl std::fmt::Debug for SourceRetriever {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceRetriever")
            .field("chain", &self.chain)
            .field("cached", &self.cache.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Returns a fixed list (or fails) and counts calls.
    struct StubEngine {
        label: &'static str,
        sources: Option<Vec<Source>>,
        calls: AtomicU32,
    }

    impl StubEngine {
        fn returning(label: &'static str, n: usize) -> Arc<Self> {
            let sources = (0..n)
                .filter_map(|i| {
                    Source::new(
                        format!("{label}-{i}"),
                        format!("Result {i}"),
                        format!("https://{label}.example.org/{i}"),
                        "snippet",
                    )
                })
                .collect();
            Arc::new(Self {
                label,
                sources: Some(sources),
                calls: AtomicU32::new(0),
            })
        }

        fn failing(label: &'static str) -> Arc<Self> {
            Arc::new(Self {
                label,
                sources: None,
                calls: AtomicU32::new(0),
            })
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::Relaxed)
        }
    }

    #[async_trait]
    impl Provider<SearchQuery, Vec<Source>> for StubEngine {
        fn name(&self) -> &str {
            self.label
        }

        async fn attempt(&self, _query: &SearchQuery) -> Result<Vec<Source>, SearchError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            self.sources
                .clone()
                .ok_or_else(|| SearchError::Http(format!("{} down", self.label)))
        }
    }

    #[tokio::test]
    async fn primary_success_is_returned_without_secondary() {
        let primary = StubEngine::returning("primary", 3);
        let secondary = StubEngine::returning("secondary", 3);
        let providers: Vec<SearchProvider> = vec![primary.clone(), secondary.clone()];
        let retriever = SourceRetriever::with_providers(providers, 0);

        let sources = retriever.retrieve("rust", 8).await;
        assert_eq!(sources.len(), 3);
        assert_eq!(sources[0].id, "primary-0");
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn empty_success_is_not_replaced() {
        let providers: Vec<SearchProvider> = vec![
            StubEngine::failing("primary"),
            StubEngine::returning("secondary", 0),
        ];
        let retriever = SourceRetriever::with_providers(providers, 0);

        let sources = retriever.retrieve("obscure query", 8).await;
        assert!(sources.is_empty());
    }

    #[tokio::test]
    async fn all_failures_fall_back_to_offline_bundle() {
        let providers: Vec<SearchProvider> =
            vec![StubEngine::failing("primary"), StubEngine::failing("secondary")];
        let retriever = SourceRetriever::with_providers(providers, 0);

        let sources = retriever.retrieve("What is quantum computing?", 8).await;
        assert_eq!(sources.len(), 6);
        assert!(sources.iter().all(|s| s.id.starts_with("fallback-")));
        assert_eq!(sources[0].title, "Quantum Computing Advances");
    }

    #[tokio::test]
    async fn results_are_truncated_to_count() {
        let providers: Vec<SearchProvider> = vec![StubEngine::returning("primary", 10)];
        let retriever = SourceRetriever::with_providers(providers, 0);
        assert_eq!(retriever.retrieve("rust", 4).await.len(), 4);
    }

    #[tokio::test]
    async fn cache_serves_repeat_queries() {
        let primary = StubEngine::returning("primary", 2);
        let providers: Vec<SearchProvider> = vec![primary.clone()];
        let retriever = SourceRetriever::with_providers(providers, 60);

        let first = retriever.retrieve("Rust ", 8).await;
        let second = retriever.retrieve("rust", 8).await;
        assert_eq!(first, second);
        assert_eq!(primary.calls(), 1);
    }

    #[tokio::test]
    async fn offline_results_are_not_cached() {
        let primary = StubEngine::failing("primary");
        let providers: Vec<SearchProvider> = vec![primary.clone()];
        let retriever = SourceRetriever::with_providers(providers, 60);

        retriever.retrieve("oceans", 8).await;
        retriever.retrieve("oceans", 8).await;
        assert_eq!(primary.calls(), 2);
    }

    #[test]
    fn serpapi_tier_requires_key() {
        let without_key = SourceRetriever::new(&RetrievalConfig::default());
        assert_eq!(without_key.provider_names(), vec!["duckduckgo"]);

        let with_key = SourceRetriever::new(&RetrievalConfig {
            serpapi_key: Some("key".into()),
            ..Default::default()
        });
        assert_eq!(with_key.provider_names(), vec!["serpapi", "duckduckgo"]);
    }
}
