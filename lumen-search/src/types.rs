//! Core types for retrieved sources and provider requests.

use serde::{Deserialize, Serialize};
use url::Url;

/// A single retrieved web reference.
///
/// Immutable once created. `domain` is always derived from `url` via
/// [`domain_of`], never copied from a provider's display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Provider-scoped identifier, e.g. `serp-0`, `ddg-3`, `fallback-5`.
    pub id: String,
    /// Title of the referenced page.
    pub title: String,
    /// URL of the referenced page.
    pub url: String,
    /// Short text summarising the page.
    pub snippet: String,
    /// Host component of `url`.
    pub domain: String,
    /// Publication date as reported by the provider, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Rank-derived relevance within a single retrieval call (`1 - index * step`).
    /// Not comparable across calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}

impl Source {
    /// Build a source from provider fields, deriving the domain from `url`.
    ///
    /// Returns `None` when `url` has no parseable host.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Option<Self> {
        let url = url.into();
        let domain = domain_of(&url)?;
        Some(Self {
            id: id.into(),
            title: title.into(),
            url,
            snippet: snippet.into(),
            domain,
            published_date: None,
            relevance_score: None,
        })
    }

    /// Attach a rank-derived relevance score.
    pub fn with_relevance(mut self, score: f64) -> Self {
        self.relevance_score = Some(score);
        self
    }

    /// Attach a provider-reported publication date.
    pub fn with_published_date(mut self, date: Option<String>) -> Self {
        self.published_date = date;
        self
    }
}

/// Extract the host component of a URL.
pub fn domain_of(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str().map(str::to_owned)
}

/// Rank-derived relevance: `1 - index * step`.
pub fn rank_relevance(index: usize, step: f64) -> f64 {
    1.0 - index as f64 * step
}

/// Input to a search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text query as entered by the user.
    pub text: String,
    /// Maximum number of sources wanted.
    pub count: usize,
}

impl SearchQuery {
    /// Create a query for up to `count` sources.
    pub fn new(text: impl Into<String>, count: usize) -> Self {
        Self {
            text: text.into(),
            count,
        }
    }
}
