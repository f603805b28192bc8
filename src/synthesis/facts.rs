//! Fact extraction from the synthesis context.

use super::scoring::score_sentence;

/// Maximum fragments kept from one context.
const MAX_FACTS: usize = 10;

/// Fragments shorter than this (after trimming) are discarded unscored.
const MIN_FRAGMENT_CHARS: usize = 20;

/// Fragments must score strictly above this to be kept.
const ACCEPT_THRESHOLD: f64 = 0.6;

/// A scored sentence-like excerpt used as raw material for templates.
#[derive(Debug, Clone, PartialEq)]
pub struct FactFragment {
    /// Trimmed fragment text.
    pub text: String,
    /// Importance score in `[0, 1]`.
    pub score: f64,
}

/// Extract up to 10 fact fragments from `context`.
///
/// Splits on `.`, `!` and `?`, drops fragments under 20 characters, and
/// keeps those scoring above 0.6 in scan order.
#[must_use]
pub fn extract_facts(context: &str) -> Vec<FactFragment> {
    context
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|fragment| fragment.chars().count() >= MIN_FRAGMENT_CHARS)
        .filter_map(|fragment| {
            let score = score_sentence(fragment);
            (score > ACCEPT_THRESHOLD).then(|| FactFragment {
                text: fragment.to_owned(),
                score,
            })
        })
        .take(MAX_FACTS)
        .collect()
}
