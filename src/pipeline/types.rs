//! Result and history records produced by the pipeline.

use chrono::{DateTime, Utc};
use lumen_search::Source;
use serde::{Deserialize, Serialize};

/// One completed search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Random UUID.
    pub id: String,
    /// The query exactly as submitted.
    pub query: String,
    /// Synthesized answer text.
    pub answer: String,
    /// At most six sources, in retrieval order.
    pub sources: Vec<Source>,
    /// At most three questions.
    pub follow_up_questions: Vec<String>,
    /// When the pipeline finished.
    pub timestamp: DateTime<Utc>,
    /// Wall-clock pipeline time in milliseconds.
    pub search_time: u64,
    /// In `[0, 0.95]`.
    pub confidence: f64,
}

/// A history entry pointing at a [`SearchResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    /// Random UUID of the entry itself.
    pub id: String,
    pub query: String,
    pub timestamp: DateTime<Utc>,
    /// [`SearchResult::id`] of the result this entry records.
    pub result_id: String,
}

impl SearchHistoryEntry {
    /// Build an entry for `result`.
    pub fn for_result(result: &SearchResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            query: result.query.clone(),
            timestamp: Utc::now(),
            result_id: result.id.clone(),
        }
    }
}

/// Observable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    Idle,
    Retrieving,
    Fetching,
    Synthesizing,
    Done,
    Failed,
}

impl PipelineState {
    /// Whether a search is in flight.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Retrieving | Self::Fetching | Self::Synthesizing)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn result() -> SearchResult {
        SearchResult {
            id: "r1".into(),
            query: "rust".into(),
            answer: "Rust is a language.".into(),
            sources: Vec::new(),
            follow_up_questions: vec!["What next?".into()],
            timestamp: Utc::now(),
            search_time: 42,
            confidence: 0.5,
        }
    }

    #[test]
    fn result_serializes_camel_case() {
        let json = serde_json::to_value(result()).unwrap();
        assert!(json.get("followUpQuestions").is_some());
        assert_eq!(json["searchTime"], 42);
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn history_entry_links_result() {
        let r = result();
        let entry = SearchHistoryEntry::for_result(&r);
        assert_eq!(entry.result_id, "r1");
        assert_eq!(entry.query, "rust");
        assert_ne!(entry.id, r.id);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["resultId"], "r1");
    }

    #[test]
    fn only_middle_states_are_active() {
        assert!(!PipelineState::Idle.is_active());
        assert!(PipelineState::Fetching.is_active());
        assert!(!PipelineState::Done.is_active());
        assert!(!PipelineState::Failed.is_active());
    }
}
