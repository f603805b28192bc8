//! DuckDuckGo search engine: keyless secondary provider.
//!
//! Uses the Instant Answer JSON API at `https://api.duckduckgo.com/` and
//! maps its `RelatedTopics` entries onto [`Source`] values. The API often
//! returns few or no related topics; an empty list is a valid answer, not
//! a failure.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::RetrievalConfig;
use crate::error::SearchError;
use crate::http;
use crate::provider::Provider;
use crate::types::{rank_relevance, SearchQuery, Source};

/// Relevance decrement per rank position.
const RELEVANCE_STEP: f64 = 0.1;

/// Title length used when the topic text has no `" - "` separator prefix.
const TITLE_FALLBACK_CHARS: usize = 60;

/// DuckDuckGo Instant Answer client.
pub struct DuckDuckGoEngine {
    config: RetrievalConfig,
}

impl DuckDuckGoEngine {
    /// Create an engine using the endpoint and timeout from `config`.
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    /// Derive a title from topic text: everything before the first `" - "`,
    /// or the first 60 characters when that prefix is empty.
    fn title_from_text(text: &str) -> String {
        match text.split(" - ").next() {
            Some(head) if !head.is_empty() => head.to_owned(),
            _ => text.chars().take(TITLE_FALLBACK_CHARS).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<RelatedTopic>,
}

/// Related topic entry. Category groups carry `Topics` instead of
/// `FirstURL`/`Text` and are skipped.
#[derive(Debug, Deserialize)]
struct RelatedTopic {
    #[serde(rename = "FirstURL")]
    first_url: Option<String>,
    #[serde(rename = "Text")]
    text: Option<String>,
}

#[async_trait]
impl Provider<SearchQuery, Vec<Source>> for DuckDuckGoEngine {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn attempt(&self, query: &SearchQuery) -> Result<Vec<Source>, SearchError> {
        tracing::trace!(query = %query.text, "DuckDuckGo search");

        let client = http::build_client(&self.config)?;
        let request = client
            .get(&self.config.duckduckgo_url)
            .query(&[
                ("q", query.text.as_str()),
                ("format", "json"),
                ("no_html", "1"),
                ("skip_disambig", "1"),
            ])
            .header(reqwest::header::ACCEPT, "application/json");

        let body = http::get_text(request, "DuckDuckGo").await?;
        parse_duckduckgo_json(&body, query.count)
    }
}

/// Parse an Instant Answer JSON body into sources.
///
/// Only the first `max_results` related topics are considered; entries
/// missing either `FirstURL` or `Text` are skipped without renumbering.
pub(crate) fn parse_duckduckgo_json(
    body: &str,
    max_results: usize,
) -> Result<Vec<Source>, SearchError> {
    let answer: InstantAnswer = serde_json::from_str(body)
        .map_err(|e| SearchError::Parse(format!("invalid DuckDuckGo response: {e}")))?;

    let mut sources = Vec::new();
    for (index, topic) in answer.related_topics.into_iter().take(max_results).enumerate() {
        let (Some(url), Some(text)) = (topic.first_url, topic.text) else {
            continue;
        };
        if url.is_empty() || text.is_empty() {
            continue;
        }

        let title = DuckDuckGoEngine::title_from_text(&text);
        match Source::new(format!("ddg-{index}"), title, url, text) {
            Some(source) => {
                sources.push(source.with_relevance(rank_relevance(index, RELEVANCE_STEP)));
            }
            None => tracing::debug!(index, "skipping DuckDuckGo topic with unparseable URL"),
        }
    }

    tracing::debug!(count = sources.len(), "DuckDuckGo results parsed");
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_DDG_JSON: &str = r#"{
        "Abstract": "",
        "RelatedTopics": [
            {
                "FirstURL": "https://duckduckgo.com/Rust_(programming_language)",
                "Text": "Rust (programming language) - A multi-paradigm, general-purpose programming language."
            },
            {
                "Name": "See also",
                "Topics": [
                    {"FirstURL": "https://duckduckgo.com/Cargo", "Text": "Cargo - package manager"}
                ]
            },
            {
                "FirstURL": "https://duckduckgo.com/c/Systems_programming_languages",
                "Text": "Systems programming languages"
            },
            {
                "Text": "Missing URL entry"
            }
        ]
    }"#;

    #[test]
    fn parse_maps_related_topics() {
        let sources = parse_duckduckgo_json(MOCK_DDG_JSON, 10).expect("should parse");
        assert_eq!(sources.len(), 2);

        assert_eq!(sources[0].id, "ddg-0");
        assert_eq!(sources[0].title, "Rust (programming language)");
        assert!(sources[0].snippet.contains("multi-paradigm"));
        assert_eq!(sources[0].domain, "duckduckgo.com");
        assert_eq!(sources[0].relevance_score, Some(1.0));

        // Index 1 is a category group and is skipped without renumbering.
        assert_eq!(sources[1].id, "ddg-2");
        assert_eq!(sources[1].title, "Systems programming languages");
        let score = sources[1].relevance_score.expect("score set");
        assert!((score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn max_results_limits_topics_considered() {
        let sources = parse_duckduckgo_json(MOCK_DDG_JSON, 2).expect("should parse");
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].id, "ddg-0");
    }

    #[test]
    fn no_related_topics_is_empty_not_error() {
        let sources = parse_duckduckgo_json(r#"{"Abstract": ""}"#, 8).expect("should parse");
        assert!(sources.is_empty());
        let sources = parse_duckduckgo_json(r#"{"RelatedTopics": []}"#, 8).expect("should parse");
        assert!(sources.is_empty());
    }

    #[test]
    fn title_uses_text_before_separator() {
        assert_eq!(DuckDuckGoEngine::title_from_text("Cargo - package manager"), "Cargo");
        assert_eq!(DuckDuckGoEngine::title_from_text("No separator"), "No separator");
    }

    #[test]
    fn title_falls_back_to_first_sixty_chars() {
        let text = format!(" - {}", "x".repeat(100));
        let title = DuckDuckGoEngine::title_from_text(&text);
        assert_eq!(title.chars().count(), 60);
        assert!(title.starts_with(" - "));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            parse_duckduckgo_json("not json", 8),
            Err(SearchError::Parse(_))
        ));
    }

    #[test]
    fn is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DuckDuckGoEngine>();
    }
}
