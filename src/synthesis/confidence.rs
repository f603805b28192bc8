//! Answer confidence estimation.

use lumen_search::Source;

/// Upper bound on any confidence value.
pub const MAX_CONFIDENCE: f64 = 0.95;

const BASE: f64 = 0.5;
const QUALITY_WEIGHT: f64 = 0.2;
const STEP: f64 = 0.1;

/// Domain substrings counted as higher-quality sources.
const QUALITY_MARKERS: &[&str] = &["edu", "gov", "org"];

/// Content and answer length thresholds, in characters.
const CONTENT_THRESHOLDS: [usize; 2] = [1000, 3000];
const ANSWER_THRESHOLDS: [usize; 2] = [500, 1000];

/// Estimate confidence in `[0, 0.95]` from source quality, scraped
/// content depth and answer length.
///
/// A domain counts as quality when it merely contains `edu`, `gov` or
/// `org`, so `organic.com` qualifies. Empty `sources` contributes nothing.
#[must_use]
pub fn estimate(sources: &[Source], scraped: &[String], answer: &str) -> f64 {
    let mut confidence = BASE;

    if !sources.is_empty() {
        let quality = sources
            .iter()
            .filter(|s| QUALITY_MARKERS.iter().any(|m| s.domain.contains(m)))
            .count();
        confidence += quality as f64 / sources.len() as f64 * QUALITY_WEIGHT;
    }

    let content_chars: usize = scraped.iter().map(|t| t.chars().count()).sum();
    confidence += steps_above(content_chars, &CONTENT_THRESHOLDS);
    confidence += steps_above(answer.chars().count(), &ANSWER_THRESHOLDS);

    confidence.clamp(0.0, MAX_CONFIDENCE)
}

fn steps_above(value: usize, thresholds: &[usize]) -> f64 {
    thresholds.iter().filter(|t| value > **t).count() as f64 * STEP
}
