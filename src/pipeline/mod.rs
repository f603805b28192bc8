//! Answer pipeline: `Idle → Retrieving → Fetching → Synthesizing → Done | Failed`.
//!
//! [`Orchestrator`] sequences one search and is shareable across tasks.
//! [`SearchSession`] wraps it with the current result, the error
//! side-channel, bounded history and an observable [`PipelineState`].

pub mod history;
pub mod orchestrator;
pub mod session;
pub mod types;

pub use history::SearchHistory;
pub use orchestrator::Orchestrator;
pub use session::SearchSession;
pub use types::{PipelineState, SearchHistoryEntry, SearchResult};
