//! Direct page fetch: downloads the target URL itself.

use async_trait::async_trait;

use crate::config::RetrievalConfig;
use crate::content::{extract_text, DIRECT_CONTENT_SELECTORS};
use crate::error::SearchError;
use crate::http::{self, ACCEPT_HTML};
use crate::provider::Provider;

/// Fetches the page directly and extracts up to `direct_content_limit`
/// characters of text. Any non-2xx status is a failure.
pub struct DirectScraper {
    config: RetrievalConfig,
}

impl DirectScraper {
    /// Create a direct scraper using the timeout and limits from `config`.
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Provider<str, String> for DirectScraper {
    fn name(&self) -> &str {
        "direct"
    }

    async fn attempt(&self, url: &str) -> Result<String, SearchError> {
        tracing::trace!(url, "direct page fetch");

        let client = http::build_client(&self.config)?;
        let request = client
            .get(url)
            .header(reqwest::header::ACCEPT, ACCEPT_HTML);

        let html = http::get_text(request, "direct fetch").await?;
        Ok(extract_text(
            &html,
            DIRECT_CONTENT_SELECTORS,
            self.config.direct_content_limit,
        ))
    }
}
