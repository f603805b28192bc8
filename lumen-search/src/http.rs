//! HTTP plumbing shared by every provider: client construction and a
//! status-checked text fetch.

use std::borrow::Cow;
use std::time::Duration;

use rand::seq::SliceRandom;

use crate::config::RetrievalConfig;
use crate::error::SearchError;

/// `Accept` header sent for HTML page requests.
pub const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Maximum redirects followed per request.
const MAX_REDIRECTS: usize = 10;

/// Desktop browser agents picked from when no agent is configured.
const BROWSER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36 Edg/128.0.0.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:129.0) Gecko/20100101 Firefox/129.0",
];

/// The configured agent, or a random browser agent.
pub fn user_agent_for(config: &RetrievalConfig) -> Cow<'_, str> {
    match config.user_agent.as_deref() {
        Some(agent) => Cow::Borrowed(agent),
        None => Cow::Borrowed(
            BROWSER_AGENTS
                .choose(&mut rand::thread_rng())
                .copied()
                .unwrap_or(BROWSER_AGENTS[0]),
        ),
    }
}

/// Build a client bounded by `config.timeout_seconds`, with cookies,
/// compressed transfer and a rotated User-Agent.
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the TLS backend cannot be initialised.
pub fn build_client(config: &RetrievalConfig) -> Result<reqwest::Client, SearchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(user_agent_for(config).into_owned())
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .map_err(|e| SearchError::Http(format!("cannot build HTTP client: {e}")))
}

/// Send `request` and return the body of a 2xx response.
///
/// Any other status is an error naming `provider`.
pub(crate) async fn get_text(
    request: reqwest::RequestBuilder,
    provider: &str,
) -> Result<String, SearchError> {
    let response = request
        .send()
        .await
        .map_err(|e| SearchError::transport(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SearchError::Http(format!("{provider} returned HTTP {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| SearchError::transport(provider, e))?;
    tracing::trace!(provider, bytes = body.len(), "response received");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_agent_wins() {
        let config = RetrievalConfig {
            user_agent: Some("LumenBot/1.0".into()),
            ..Default::default()
        };
        assert_eq!(user_agent_for(&config), "LumenBot/1.0");
    }

    #[test]
    fn rotated_agent_comes_from_list() {
        let config = RetrievalConfig::default();
        let agent = user_agent_for(&config);
        assert!(BROWSER_AGENTS.contains(&agent.as_ref()));
    }

    #[test]
    fn client_builds_from_defaults() {
        assert!(build_client(&RetrievalConfig::default()).is_ok());
    }

    #[test]
    fn accept_header_prefers_html() {
        assert!(ACCEPT_HTML.starts_with("text/html"));
    }
}
