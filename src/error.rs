//! Error types for the lumen answer pipeline.

/// Top-level error type for retrieval, synthesis, and pipeline coordination.
#[derive(Debug, thiserror::Error)]
pub enum LumenError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Answer synthesis failed internally.
    #[error("synthesis error: {0}")]
    Synthesis(String),

    /// Pipeline coordination error.
    #[error("pipeline error: {0}")]
    Pipeline(String),

    /// Retrieval-layer error.
    #[error(transparent)]
    Search(#[from] lumen_search::SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LumenError>;
