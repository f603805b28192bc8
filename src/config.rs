//! Configuration types for the answer pipeline.

use lumen_search::RetrievalConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the SerpAPI key.
pub const SERPAPI_KEY_ENV: &str = "SERPAPI_KEY";
/// Environment variable holding the ScraperAPI key.
pub const SCRAPER_API_KEY_ENV: &str = "SCRAPER_API_KEY";

/// Upper bound on sources carried in a search result.
pub const MAX_RESULT_SOURCES: usize = 6;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LumenConfig {
    /// Search providers, page fetching, timeouts, and caching.
    pub search: RetrievalConfig,
    /// Pipeline sizing.
    pub pipeline: PipelineConfig,
}

/// Pipeline sizing limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// How many sources to request from the retriever.
    pub max_sources: usize,
    /// How many of the leading sources to fetch page content for.
    pub fetch_count: usize,
    /// How many sources to keep in the returned result.
    pub result_sources: usize,
    /// How many history entries a session keeps.
    pub history_capacity: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_sources: 8,
            fetch_count: 3,
            result_sources: 6,
            history_capacity: 10,
        }
    }
}

impl PipelineConfig {
    /// Validates the sizing limits.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LumenError::Config`] for a zero source count or
    /// history capacity, or more than [`MAX_RESULT_SOURCES`] result sources.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.max_sources == 0 || self.result_sources == 0 || self.history_capacity == 0 {
            return Err(crate::error::LumenError::Config(
                "pipeline sizes must be greater than 0".into(),
            ));
        }
        if self.result_sources > MAX_RESULT_SOURCES {
            return Err(crate::error::LumenError::Config(format!(
                "result_sources must be at most {MAX_RESULT_SOURCES}"
            )));
        }
        Ok(())
    }
}

impl LumenConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| crate::error::LumenError::Config(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &std::path::Path) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::LumenError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the default config file path: `~/.config/lumen/config.toml`.
    pub fn default_config_path() -> PathBuf {
        if let Some(config) = std::env::var_os("XDG_CONFIG_HOME") {
            PathBuf::from(config).join("lumen").join("config.toml")
        } else if let Some(home) = std::env::var_os("HOME") {
            PathBuf::from(home)
                .join(".config")
                .join("lumen")
                .join("config.toml")
        } else {
            PathBuf::from("/tmp/lumen-config/config.toml")
        }
    }

    /// Override provider keys from `SERPAPI_KEY` / `SCRAPER_API_KEY`.
    ///
    /// Unset or blank variables leave the file values untouched.
    pub fn apply_env(&mut self) {
        self.apply_keys(
            std::env::var(SERPAPI_KEY_ENV).ok(),
            std::env::var(SCRAPER_API_KEY_ENV).ok(),
        );
    }

    fn apply_keys(&mut self, serpapi: Option<String>, scraper: Option<String>) {
        if let Some(key) = serpapi.filter(|k| !k.trim().is_empty()) {
            self.search.serpapi_key = Some(key);
        }
        if let Some(key) = scraper.filter(|k| !k.trim().is_empty()) {
            self.search.scraper_api_key = Some(key);
        }
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LumenError::Config`] for zero pipeline sizes or
    /// more than [`MAX_RESULT_SOURCES`] result sources, and propagates
    /// retrieval config errors.
    pub fn validate(&self) -> crate::error::Result<()> {
        self.search.validate()?;
        self.pipeline.validate()
    }

    /// A copy with provider keys replaced by a placeholder, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.search.serpapi_key.is_some() {
            copy.search.serpapi_key = Some("<redacted>".into());
        }
        if copy.search.scraper_api_key.is_some() {
            copy.search.scraper_api_key = Some("<redacted>".into());
        }
        copy
    }
}
