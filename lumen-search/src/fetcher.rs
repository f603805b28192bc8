//! Content fetcher: ordered page-provider fallback that never fails.
//!
//! Tries ScraperAPI (only when a key is configured), then a direct fetch
//! of the page. A provider that answers with no readable text still wins;
//! only errors move on to the next tier. When every tier errors the
//! result is an empty string.

use std::sync::Arc;

use crate::config::RetrievalConfig;
use crate::provider::{FallbackChain, Provider};
use crate::scrapers::{DirectScraper, ScraperApiScraper};

/// Page provider handle accepted by [`ContentFetcher::with_providers`].
pub type PageProvider = Arc<dyn Provider<str, String>>;

/// Fetches bounded plain-text content for a page URL.
pub struct ContentFetcher {
    chain: FallbackChain<str, String>,
}

impl ContentFetcher {
    /// Build the standard page-provider chain from `config`.
    ///
    /// The ScraperAPI tier is included only when a non-blank key is set.
    pub fn new(config: &RetrievalConfig) -> Self {
        let mut providers: Vec<PageProvider> = Vec::new();
        if let Some(key) = config.scraper_api_key() {
            providers.push(Arc::new(ScraperApiScraper::new(key, config.clone())));
        }
        providers.push(Arc::new(DirectScraper::new(config.clone())));

        Self::with_providers(providers)
    }

    /// Build a fetcher over an explicit provider list.
    pub fn with_providers(providers: Vec<PageProvider>) -> Self {
        Self {
            chain: FallbackChain::new(providers),
        }
    }

    /// Provider names in try order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.names()
    }

    /// Fetch readable text for `url`, or an empty string on failure.
    pub async fn fetch(&self, url: &str) -> String {
        match self.chain.run(url).await {
            Ok((provider, text)) => {
                tracing::debug!(provider = %provider, chars = text.chars().count(), "page content fetched");
                text
            }
            Err(err) => {
                tracing::warn!(error = %err, "content fetch failed, returning empty content");
                String::new()
            }
        }
    }
}

impl std::fmt::Debug for ContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFetcher")
            .field("chain", &self.chain)
            .finish()
    }
}
