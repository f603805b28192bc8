//! Page content provider implementations.
//!
//! Each module provides a struct implementing [`crate::provider::Provider`]
//! over a page URL that downloads HTML and reduces it to bounded plain
//! text via [`crate::content::extract_text`].

pub mod direct;
pub mod scraper_api;

pub use direct::DirectScraper;
pub use scraper_api::ScraperApiScraper;
