//! Retrieval configuration with sensible defaults.
//!
//! [`RetrievalConfig`] holds the optional provider secrets, provider
//! endpoints, timeouts, caching, and content limits. Provider tiers whose
//! key is absent are skipped without error.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Default SerpAPI endpoint (key-authenticated primary search provider).
pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";
/// Default DuckDuckGo Instant Answer endpoint (keyless secondary provider).
pub const DEFAULT_DUCKDUCKGO_URL: &str = "https://api.duckduckgo.com/";
/// Default ScraperAPI endpoint (key-authenticated scraping provider).
pub const DEFAULT_SCRAPER_API_URL: &str = "https://api.scraperapi.com/";

/// Configuration for source retrieval and content fetching.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// SerpAPI key. `None` disables the primary search tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serpapi_key: Option<String>,
    /// ScraperAPI key. `None` disables the scraping-provider tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scraper_api_key: Option<String>,
    /// SerpAPI search endpoint.
    pub serpapi_url: String,
    /// DuckDuckGo Instant Answer endpoint.
    pub duckduckgo_url: String,
    /// ScraperAPI endpoint.
    pub scraper_api_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in list.
    pub user_agent: Option<String>,
    /// How long to cache provider results in seconds. 0 disables caching.
    pub cache_ttl_seconds: u64,
    /// Character cap for text obtained through the scraping provider.
    pub api_content_limit: usize,
    /// Character cap for text obtained by fetching the page directly.
    pub direct_content_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            serpapi_key: None,
            scraper_api_key: None,
            serpapi_url: DEFAULT_SERPAPI_URL.to_owned(),
            duckduckgo_url: DEFAULT_DUCKDUCKGO_URL.to_owned(),
            scraper_api_url: DEFAULT_SCRAPER_API_URL.to_owned(),
            timeout_seconds: 8,
            user_agent: None,
            cache_ttl_seconds: 600,
            api_content_limit: 5000,
            direct_content_limit: 3000,
        }
    }
}

impl std::fmt::Debug for RetrievalConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RetrievalConfig")
            .field("serpapi_key", &redact(&self.serpapi_key))
            .field("scraper_api_key", &redact(&self.scraper_api_key))
            .field("serpapi_url", &self.serpapi_url)
            .field("duckduckgo_url", &self.duckduckgo_url)
            .field("scraper_api_url", &self.scraper_api_url)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("cache_ttl_seconds", &self.cache_ttl_seconds)
            .field("api_content_limit", &self.api_content_limit)
            .field("direct_content_limit", &self.direct_content_limit)
            .finish()
    }
}

fn redact(key: &Option<String>) -> &'static str {
    match key {
        Some(_) => "<redacted>",
        None => "<unset>",
    }
}

impl RetrievalConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - both content limits must be greater than 0
    /// - endpoints must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.api_content_limit == 0 || self.direct_content_limit == 0 {
            return Err(SearchError::Config(
                "content limits must be greater than 0".into(),
            ));
        }
        if self.serpapi_url.is_empty()
            || self.duckduckgo_url.is_empty()
            || self.scraper_api_url.is_empty()
        {
            return Err(SearchError::Config(
                "provider endpoints must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The SerpAPI key, if configured and non-blank.
    pub fn serpapi_key(&self) -> Option<&str> {
        non_blank(self.serpapi_key.as_deref())
    }

    /// The ScraperAPI key, if configured and non-blank.
    pub fn scraper_api_key(&self) -> Option<&str> {
        non_blank(self.scraper_api_key.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = RetrievalConfig::default();
        assert_eq!(config.timeout_seconds, 8);
        assert_eq!(config.cache_ttl_seconds, 600);
        assert_eq!(config.api_content_limit, 5000);
        assert_eq!(config.direct_content_limit, 3000);
        assert!(config.serpapi_key.is_none());
        assert!(config.scraper_api_key.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(RetrievalConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = RetrievalConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_content_limit_rejected() {
        let config = RetrievalConfig {
            direct_content_limit: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("content limits"));
    }

    #[test]
    fn empty_endpoint_rejected() {
        let config = RetrievalConfig {
            duckduckgo_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_keys_count_as_absent() {
        let config = RetrievalConfig {
            serpapi_key: Some("   ".into()),
            scraper_api_key: Some("abc".into()),
            ..Default::default()
        };
        assert!(config.serpapi_key().is_none());
        assert_eq!(config.scraper_api_key(), Some("abc"));
    }

    #[test]
    fn debug_output_redacts_keys() {
        let config = RetrievalConfig {
            serpapi_key: Some("super-secret".into()),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let json = r#"{"timeout_seconds": 3}"#;
        let config: RetrievalConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.duckduckgo_url, DEFAULT_DUCKDUCKGO_URL);
    }
}
