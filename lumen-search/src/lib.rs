//! # lumen-search
//!
//! Source retrieval and page content fetching for Lumen.
//!
//! ## Design
//!
//! - Search providers are tried in order (SerpAPI when keyed, then the
//!   DuckDuckGo Instant Answer API); the first success wins
//! - When every provider fails, a deterministic offline topic bundle is
//!   returned, so retrieval always yields sources
//! - Page content comes from ScraperAPI when keyed, then a direct fetch;
//!   failures yield an empty string rather than an error
//! - All provider responses are normalised into [`Source`]; the domain is
//!   always derived from the URL host
//! - In-memory result cache with configurable TTL
//!
//! ## Security
//!
//! - API keys are optional; absent keys disable their tier silently
//! - Keys never appear in error messages or `Debug` output
//! - Search queries are logged only at trace level

pub mod config;
pub mod content;
pub mod engines;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod provider;
pub mod retriever;
pub mod scrapers;
pub mod types;

pub use config::RetrievalConfig;
pub use error::{Result, SearchError};
pub use fetcher::{ContentFetcher, PageProvider};
pub use provider::{FallbackChain, Provider};
pub use retriever::{SearchProvider, SourceRetriever};
pub use types::{domain_of, SearchQuery, Source};

/// Retrieve up to `count` sources for `query` with a one-off retriever.
///
/// Validates `config` first; after that, retrieval itself never fails.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lumen_search::Result<()> {
/// let config = lumen_search::RetrievalConfig::default();
/// let sources = lumen_search::retrieve_sources("rust programming", 8, &config).await?;
/// for source in &sources {
///     println!("{} ({})", source.title, source.domain);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn retrieve_sources(
    query: &str,
    count: usize,
    config: &RetrievalConfig,
) -> Result<Vec<Source>> {
    config.validate()?;
    Ok(SourceRetriever::new(config).retrieve(query, count).await)
}

/// Fetch readable text for `url` with a one-off fetcher.
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Fetch failures
/// are not errors: they yield an empty string.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> lumen_search::Result<()> {
/// let config = lumen_search::RetrievalConfig::default();
/// let text = lumen_search::fetch_content("https://example.com", &config).await?;
/// println!("{} chars", text.chars().count());
/// # Ok(())
/// # }
/// ```
pub async fn fetch_content(url: &str, config: &RetrievalConfig) -> Result<String> {
    config.validate()?;
    Ok(ContentFetcher::new(config).fetch(url).await)
}
