//! Pluggable provider trait and the ordered fallback chain driver.
//!
//! Search providers (SerpAPI, DuckDuckGo, offline bundles) and page
//! providers (ScraperAPI, direct fetch) implement [`Provider`] for their
//! input and output types. A [`FallbackChain`] tries its providers in
//! order and stops at the first success; failures are logged and the next
//! tier is tried. No results are merged across providers.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::SearchError;

/// One tier of a fallback chain.
///
/// Implementations normalise their provider-specific responses into `Out`.
/// A successful call with no usable items is still `Ok`: only transport,
/// status, and parse failures are errors.
#[async_trait]
pub trait Provider<In, Out>: Send + Sync
where
    In: ?Sized + Sync,
    Out: Send,
{
    /// Stable provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Attempt to produce an output for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on any failure that should fall through to
    /// the next tier.
    async fn attempt(&self, input: &In) -> Result<Out, SearchError>;
}

/// Ordered list of providers; the first success wins.
pub struct FallbackChain<In: ?Sized + Sync, Out: Send> {
    providers: Vec<Arc<dyn Provider<In, Out>>>,
}

impl<In, Out> FallbackChain<In, Out>
where
    In: ?Sized + Sync,
    Out: Send,
{
    /// Create a chain that tries `providers` in order.
    pub fn new(providers: Vec<Arc<dyn Provider<In, Out>>>) -> Self {
        Self { providers }
    }

    /// Number of tiers in the chain.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Whether the chain has no tiers.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in try order.
    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Try each provider in order, returning the first success together
    /// with the name of the provider that produced it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::AllProvidersFailed`] when every tier fails
    /// (or the chain is empty).
    pub async fn run(&self, input: &In) -> Result<(String, Out), SearchError> {
        let mut errors: Vec<String> = Vec::new();

        for provider in &self.providers {
            match provider.attempt(input).await {
                Ok(output) => {
                    tracing::debug!(provider = provider.name(), "provider succeeded");
                    return Ok((provider.name().to_owned(), output));
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "provider failed, trying next tier"
                    );
                    errors.push(format!("{}: {err}", provider.name()));
                }
            }
        }

        if errors.is_empty() {
            return Err(SearchError::AllProvidersFailed(
                "no providers configured".into(),
            ));
        }
        Err(SearchError::AllProvidersFailed(errors.join("; ")))
    }
}

impl<In: ?Sized + Sync, Out: Send> std::fmt::Debug for FallbackChain<In, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("FallbackChain")
            .field("providers", &names)
            .finish()
    }
}
