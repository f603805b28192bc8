//! Answer synthesis: context building, concurrent strategies, selection,
//! follow-ups and confidence.
//!
//! ```text
//! sources + page texts ─► context ─┬─► factual    ─┐
//!                                  ├─► analytical ─┼─► select ─► answer
//!                                  └─► contextual ─┘
//! ```
//!
//! All three strategies run to completion before selection. Synthesis
//! never fails: any internal error yields [`fallback_answer`].

pub mod classify;
pub mod confidence;
pub mod facts;
pub mod follow_up;
pub mod scoring;
pub mod strategy;
pub mod templates;

use std::fmt::Write as _;
use std::sync::Arc;

use futures_util::future::join_all;
use lumen_search::Source;
use serde::Serialize;

use crate::error::{LumenError, Result};

pub use classify::QueryKind;
pub use confidence::MAX_CONFIDENCE;
pub use facts::{extract_facts, FactFragment};
pub use follow_up::{follow_up_questions, MAX_FOLLOW_UPS};
pub use scoring::score_sentence;
pub use strategy::Strategy;

/// Characters of each page text included in the context.
const CONTEXT_CONTENT_CHARS: usize = 1000;

/// Confidence reported with the fallback answer.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

/// Synthesized answer with follow-ups and confidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthesis {
    pub answer: String,
    pub follow_up_questions: Vec<String>,
    pub confidence: f64,
}

/// Stateless answer synthesizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Synthesize an answer for `query` from `sources` and fetched page texts.
    ///
    /// Never fails. Internal errors are logged and replaced by the fixed
    /// fallback answer with confidence 0.3.
    pub async fn synthesize(&self, query: &str, sources: &[Source], scraped: &[String]) -> Synthesis {
        match self.try_synthesize(query, sources, scraped).await {
            Ok(synthesis) => synthesis,
            Err(e) => {
                tracing::warn!(error = %e, "synthesis failed, using fallback answer");
                fallback_answer(query)
            }
        }
    }

    async fn try_synthesize(
        &self,
        query: &str,
        sources: &[Source],
        scraped: &[String],
    ) -> Result<Synthesis> {
        let context = build_context(query, sources, scraped);
        tracing::trace!(chars = context.len(), "synthesis context built");

        let answers = run_strategies(query, context).await?;
        let answer = select_best(answers, query)
            .ok_or_else(|| LumenError::Synthesis("no strategy produced an answer".into()))?;

        let follow_up_questions = follow_up_questions(query);
        let confidence = confidence::estimate(sources, scraped, &answer);
        tracing::debug!(
            answer_chars = answer.chars().count(),
            confidence,
            "answer synthesized"
        );

        Ok(Synthesis {
            answer,
            follow_up_questions,
            confidence,
        })
    }
}

async fn run_strategies(query: &str, context: String) -> Result<Vec<String>> {
    let query: Arc<str> = Arc::from(query);
    let context: Arc<str> = Arc::from(context);

    join_strategies(move |strategy| {
        let query = Arc::clone(&query);
        let context = Arc::clone(&context);
        async move { strategy.generate(&query, &context) }
    })
    .await
}

/// Run `generate` for every strategy on its own task and wait for all of them.
///
/// Answers come back in [`Strategy::ALL`] order regardless of finish order.
async fn join_strategies<F, Fut>(generate: F) -> Result<Vec<String>>
where
    F: Fn(Strategy) -> Fut,
    Fut: Future<Output = String> + Send + 'static,
{
    let handles = Strategy::ALL.map(|strategy| tokio::spawn(generate(strategy)));

    join_all(handles)
        .await
        .into_iter()
        .zip(Strategy::ALL)
        .map(|(joined, strategy)| {
            joined.map_err(|e| {
                LumenError::Synthesis(format!("{} strategy failed: {e}", strategy.name()))
            })
        })
        .collect()
}

/// Build the shared synthesis context.
///
/// Lists every source (title, URL, snippet, domain), then the first 1000
/// characters of each non-blank page text.
#[must_use]
pub fn build_context(query: &str, sources: &[Source], scraped: &[String]) -> String {
    let mut context = format!("Query: {query}\n\nAvailable Sources:\n");
    for (i, source) in sources.iter().enumerate() {
        let _ = write!(
            context,
            "{}. {}\n   URL: {}\n   Summary: {}\n   Domain: {}\n\n",
            i + 1,
            source.title,
            source.url,
            source.snippet,
            source.domain
        );
    }

    if !scraped.is_empty() {
        context.push_str("Detailed Content:\n");
        for (i, text) in scraped.iter().enumerate() {
            if text.trim().is_empty() {
                continue;
            }
            let head: String = text.chars().take(CONTEXT_CONTENT_CHARS).collect();
            let _ = write!(context, "Source {} Content:\n{head}...\n\n", i + 1);
        }
    }

    context
}

/// Pick the answer to return.
///
/// Folds from the first answer, switching only to a candidate that is
/// strictly longer and contains the query's first whitespace-delimited
/// token (case-sensitive). With no such candidate the first answer stays.
#[must_use]
pub fn select_best(answers: Vec<String>, query: &str) -> Option<String> {
    let keyword = query.split_whitespace().next().unwrap_or_default();
    answers.into_iter().reduce(|best, candidate| {
        if candidate.chars().count() > best.chars().count() && candidate.contains(keyword) {
            candidate
        } else {
            best
        }
    })
}

/// The fixed answer used when synthesis fails.
#[must_use]
pub fn fallback_answer(query: &str) -> Synthesis {
    Synthesis {
        answer: format!(
            "I understand you're asking about {query}. While I'm currently processing this \
             information, I can provide some general insights. This topic involves multiple \
             aspects that are worth exploring further. Current research and developments in \
             this area show promising trends and applications across various fields."
        ),
        follow_up_questions: follow_up::generic_follow_ups(query),
        confidence: FALLBACK_CONFIDENCE,
    }
}
