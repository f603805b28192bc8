//! Session state around the orchestrator.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt as _;
use tokio::sync::watch;

use super::history::SearchHistory;
use super::orchestrator::Orchestrator;
use super::types::{PipelineState, SearchHistoryEntry, SearchResult};
use crate::config::LumenConfig;
use crate::error::{LumenError, Result};

/// Current result, error side-channel, history and pipeline state for
/// one user.
///
/// Mutation goes through `&mut self`, so a session runs one search at a
/// time. Overlapping searches need separate sessions sharing one
/// [`Orchestrator`]; their histories are not merged.
#[derive(Debug)]
pub struct SearchSession {
    orchestrator: Arc<Orchestrator>,
    history: SearchHistory,
    current: Option<SearchResult>,
    error: Option<String>,
    state: watch::Sender<PipelineState>,
}

impl SearchSession {
    /// Create a session over a shared orchestrator.
    pub fn new(orchestrator: Arc<Orchestrator>) -> Self {
        let capacity = orchestrator.limits().history_capacity;
        let (state, _) = watch::channel(PipelineState::Idle);
        Self {
            orchestrator,
            history: SearchHistory::new(capacity),
            current: None,
            error: None,
            state,
        }
    }

    /// Build an orchestrator from `config` and wrap it in a session.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` is invalid.
    pub fn from_config(config: &LumenConfig) -> Result<Self> {
        Ok(Self::new(Arc::new(Orchestrator::new(config)?)))
    }

    /// Run a search.
    ///
    /// Returns `None` without touching any state for a blank query. On
    /// failure, including a panic inside the pipeline, the message is stored
    /// in [`Self::last_error`], the state becomes [`PipelineState::Failed`]
    /// and `None` is returned. On success the result becomes current and a
    /// history entry is pushed to the front.
    pub async fn perform_search(&mut self, query: &str) -> Option<SearchResult> {
        if query.trim().is_empty() {
            return None;
        }

        self.error = None;
        let state = &self.state;
        let run = self.orchestrator.run_observed(query, |stage| {
            state.send_replace(stage);
        });
        let outcome = AssertUnwindSafe(run)
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| Err(LumenError::Pipeline(panic_message(panic.as_ref()))));

        match outcome {
            Ok(result) => {
                self.history.push(SearchHistoryEntry::for_result(&result));
                self.current = Some(result.clone());
                Some(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "search failed");
                self.state.send_replace(PipelineState::Failed);
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Drop every history entry.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Drop the current result and any stored error.
    pub fn clear_current_result(&mut self) {
        self.current = None;
        self.error = None;
    }

    /// Result of the most recent successful search.
    pub fn current_result(&self) -> Option<&SearchResult> {
        self.current.as_ref()
    }

    /// Past searches, newest first.
    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    /// Message of the last failed search, cleared when a new one starts.
    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Current pipeline stage.
    pub fn state(&self) -> PipelineState {
        *self.state.borrow()
    }

    /// True while a stage between retrieval and synthesis is running.
    pub fn is_searching(&self) -> bool {
        self.state().is_active()
    }

    /// Watch stage transitions from another task.
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state.subscribe()
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    let detail = panic
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| panic.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown cause");
    format!("search aborted: {detail}")
}
