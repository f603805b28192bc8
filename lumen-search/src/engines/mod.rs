//! Search provider implementations.
//!
//! Each networked module provides a struct implementing
//! [`crate::provider::Provider`] over [`crate::types::SearchQuery`] that
//! calls one search API and normalises its response into
//! [`crate::types::Source`] values. [`offline`] is the terminal,
//! network-free tier.

pub mod duckduckgo;
pub mod offline;
pub mod serpapi;

pub use duckduckgo::DuckDuckGoEngine;
pub use serpapi::SerpApiEngine;
