//! SerpAPI search engine: key-authenticated primary provider.
//!
//! Calls the SerpAPI JSON endpoint with the Google engine selector and
//! maps `organic_results` entries onto [`Source`] values.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::RetrievalConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{rank_relevance, SearchQuery, Source};

/// Relevance decrement per rank position.
const RELEVANCE_STEP: f64 = 0.1;

/// SerpAPI JSON search client.
///
/// Only constructed when an API key is configured.
pub struct SerpApiEngine {
    api_key: String,
    config: RetrievalConfig,
}

impl SerpApiEngine {
    /// Create an engine authenticated with `api_key`.
    pub fn new(api_key: impl Into<String>, config: RetrievalConfig) -> Self {
        Self {
            api_key: api_key.into(),
            config,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    link: Option<String>,
    #[serde(default)]
    snippet: String,
    date: Option<String>,
}

#[async_trait]
impl Provider<SearchQuery, Vec<Source>> for SerpApiEngine {
    fn name(&self) -> &str {
        "serpapi"
    }

    async fn attempt(&self, query: &SearchQuery) -> Result<Vec<Source>, SearchError> {
        tracing::trace!(query = %query.text, "SerpAPI search");

        let client = http::build_client(&self.config)?;
        let num = query.count.to_string();
        let request = client
            .get(&self.config.serpapi_url)
            .query(&[
                ("engine", "google"),
                ("q", query.text.as_str()),
                ("api_key", self.api_key.as_str()),
                ("num", num.as_str()),
            ])
            .header(reqwest::header::ACCEPT, "application/json");

        let body = http::get_text(request, "SerpAPI").await?;
        parse_serpapi_json(&body)
    }
}

/// Parse a SerpAPI JSON body into sources.
///
/// A body without `organic_results` yields an empty list. Entries whose
/// link has no parseable host are skipped; ids keep the provider index.
pub(crate) fn parse_serpapi_json(body: &str) -> Result<Vec<Source>, SearchError> {
    let response: SerpApiResponse = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid SerpAPI response: {e}")))?;

    let sources: Vec<Source> = response
        .organic_results
        .into_iter()
        .enumerate()
        .filter_map(|(index, result)| {
            let link = result.link?;
            let source = Source::new(format!("serp-{index}"), result.title, link, result.snippet);
            if source.is_none() {
                tracing::debug!(index, "skipping SerpAPI result with unparseable link");
            }
            Some(
                source?
                    .with_published_date(result.date)
                    .with_relevance(rank_relevance(index, RELEVANCE_STEP)),
            )
        })
        .collect();

    tracing::debug!(count = sources.len(), "SerpAPI results parsed");
    Ok(sources)
}
