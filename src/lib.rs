//! Lumen: a web answer engine.
//!
//! Answers a natural-language query by retrieving candidate sources,
//! fetching page content for the leading few, and synthesizing a textual
//! answer with follow-up questions and a confidence score.
//!
//! # Architecture
//!
//! ```text
//! query ─► SourceRetriever ─► ContentFetcher ─► Synthesizer ─► SearchResult
//!           (lumen-search)     (lumen-search)    (synthesis)
//! ```
//!
//! - **Retrieval**: SerpAPI when keyed, then DuckDuckGo, then offline
//!   topic bundles; never fails
//! - **Fetching**: ScraperAPI when keyed, then a direct fetch, then an
//!   empty string; never fails
//! - **Synthesis**: three strategies run concurrently; the result is
//!   selected by length and query keyword, with a heuristic confidence
//! - **Session**: current result, error message, and a bounded history

pub mod config;
pub mod error;
pub mod pipeline;
pub mod synthesis;

pub use config::{LumenConfig, PipelineConfig};
pub use error::{LumenError, Result};
pub use lumen_search::{RetrievalConfig, Source};
pub use pipeline::{
    Orchestrator, PipelineState, SearchHistory, SearchHistoryEntry, SearchResult, SearchSession,
};
pub use synthesis::{QueryKind, Synthesis, Synthesizer};
