//! Error types for the lumen-search crate.
//!
//! All errors use stable string messages suitable for logging. No API keys
//! appear in error messages: transport errors are rendered without the
//! request URL, which carries provider keys as query parameters.

/// Errors that can occur while querying a search or scraping provider.
///
/// None of these reach the caller of [`crate::SourceRetriever::retrieve`] or
/// [`crate::ContentFetcher::fetch`]; they drive the fallback to the next tier.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Every provider in a fallback chain failed.
    #[error("all providers failed: {0}")]
    AllProvidersFailed(String),

    /// A provider call timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// An HTTP request to a provider failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a provider response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid retrieval configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl SearchError {
    /// Map a [`reqwest::Error`] raised while talking to `provider`.
    ///
    /// The request URL is stripped before formatting.
    pub(crate) fn transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout(format!("{provider}: {}", err.without_url()));
        }
        Self::Http(format!("{provider} request failed: {}", err.without_url()))
    }
}

/// Convenience type alias for lumen-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
