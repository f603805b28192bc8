//! Retrieval → fetch → synthesis sequencing.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures_util::future::join_all;
use lumen_search::{ContentFetcher, Source, SourceRetriever};

use super::types::{PipelineState, SearchResult};
use crate::config::{LumenConfig, PipelineConfig};
use crate::error::{LumenError, Result};
use crate::synthesis::{Synthesizer, MAX_FOLLOW_UPS};

/// Composition root for one answer pipeline.
///
/// Holds no per-search state, so one instance can serve overlapping
/// searches from behind an [`Arc`].
#[derive(Debug)]
pub struct Orchestrator {
    retriever: Arc<SourceRetriever>,
    fetcher: Arc<ContentFetcher>,
    synthesizer: Synthesizer,
    limits: PipelineConfig,
}

impl Orchestrator {
    /// Build the standard provider chains from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Config`] or a retrieval config error if
    /// `config` is invalid.
    pub fn new(config: &LumenConfig) -> Result<Self> {
        config.search.validate()?;
        Self::with_components(
            Arc::new(SourceRetriever::new(&config.search)),
            Arc::new(ContentFetcher::new(&config.search)),
            Synthesizer::new(),
            config.pipeline.clone(),
        )
    }

    /// Assemble an orchestrator from prebuilt components.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Config`] if `limits` fails
    /// [`PipelineConfig::validate`].
    pub fn with_components(
        retriever: Arc<SourceRetriever>,
        fetcher: Arc<ContentFetcher>,
        synthesizer: Synthesizer,
        limits: PipelineConfig,
    ) -> Result<Self> {
        limits.validate()?;
        Ok(Self {
            retriever,
            fetcher,
            synthesizer,
            limits,
        })
    }

    /// Validated sizing limits for every search.
    pub fn limits(&self) -> &PipelineConfig {
        &self.limits
    }

    /// Answer `query`.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Pipeline`] for a blank query.
    pub async fn run(&self, query: &str) -> Result<SearchResult> {
        self.run_observed(query, |_| {}).await
    }

    /// Answer `query`, reporting each stage transition to `observe`.
    ///
    /// Leading and trailing whitespace only matters for the blank check;
    /// the query is otherwise used as given.
    ///
    /// # Errors
    ///
    /// Returns [`LumenError::Pipeline`] for a blank query.
    pub async fn run_observed<F>(&self, query: &str, observe: F) -> Result<SearchResult>
    where
        F: Fn(PipelineState),
    {
        if query.trim().is_empty() {
            return Err(LumenError::Pipeline("query is empty".into()));
        }

        let started = Instant::now();
        tracing::info!("search started");
        tracing::trace!(query, "search query");

        observe(PipelineState::Retrieving);
        let sources = self
            .retriever
            .retrieve(query, self.limits.max_sources)
            .await;
        if sources.is_empty() {
            tracing::debug!("no sources found, continuing with synthesis");
        }

        observe(PipelineState::Fetching);
        let scraped = self.fetch_contents(&sources).await;

        observe(PipelineState::Synthesizing);
        let synthesis = self.synthesizer.synthesize(query, &sources, &scraped).await;

        let mut sources = sources;
        sources.truncate(self.limits.result_sources);
        let mut follow_up_questions = synthesis.follow_up_questions;
        follow_up_questions.truncate(MAX_FOLLOW_UPS);

        let search_time = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let result = SearchResult {
            id: uuid::Uuid::new_v4().to_string(),
            query: query.to_owned(),
            answer: synthesis.answer,
            sources,
            follow_up_questions,
            timestamp: Utc::now(),
            search_time,
            confidence: synthesis.confidence,
        };

        observe(PipelineState::Done);
        tracing::info!(
            sources = result.sources.len(),
            confidence = result.confidence,
            search_time_ms = search_time,
            "search finished"
        );
        Ok(result)
    }

    /// Fetch page text for the leading sources concurrently.
    ///
    /// Output is index-aligned with the fetched sources; any failure,
    /// including a panicked fetch task, becomes an empty string.
    async fn fetch_contents(&self, sources: &[Source]) -> Vec<String> {
        let handles = sources
            .iter()
            .take(self.limits.fetch_count)
            .map(|source| {
                let fetcher = Arc::clone(&self.fetcher);
                let url = source.url.clone();
                tokio::spawn(async move { fetcher.fetch(&url).await })
            });

        join_all(handles)
            .await
            .into_iter()
            .map(|joined| {
                joined.unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "content fetch task failed");
                    String::new()
                })
            })
            .collect()
    }
}
