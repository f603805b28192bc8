//! ScraperAPI page provider: key-authenticated scraping proxy.

use async_trait::async_trait;

use crate::config::RetrievalConfig;
use crate::content::{extract_text, API_CONTENT_SELECTORS};
use crate::error::SearchError;
use crate::http::{self, ACCEPT_HTML};
use crate::provider::Provider;

/// Fetches pages through ScraperAPI and extracts up to
/// `api_content_limit` characters of text.
pub struct ScraperApiScraper {
    api_key: String,
    config: RetrievalConfig,
}

impl ScraperApiScraper {
    /// Create a scraper authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, config: RetrievalConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config,
        }
    }
}

#[async_trait]
impl Provider<str, String> for ScraperApiScraper {
    fn name(&self) -> &str {
        "scraperapi"
    }

    async fn attempt(&self, url: &str) -> Result<String, SearchError> {
        tracing::trace!(url, "ScraperAPI fetch");

        let client = http::build_client(&self.config)?;
        let request = client
            .get(&self.config.scraper_api_url)
            .query(&[("api_key", self.api_key.as_str()), ("url", url)])
            .header(reqwest::header::ACCEPT, ACCEPT_HTML);

        let html = http::get_text(request, "ScraperAPI").await?;
        Ok(extract_text(
            &html,
            API_CONTENT_SELECTORS,
            self.config.api_content_limit,
        ))
    }
}
