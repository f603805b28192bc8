//! Heuristic importance scoring for sentence-like fragments.

/// Terms that mark a fragment as central to the topic (+0.3 each).
const IMPORTANCE_TERMS: &[&str] = &[
    "important",
    "significant",
    "key",
    "major",
    "primary",
    "main",
    "crucial",
    "essential",
];

/// Quantitative or evidence terms (+0.2 each).
const STATISTIC_TERMS: &[&str] = &[
    "percent", "%", "million", "billion", "increase", "decrease", "study", "research",
];

/// Recency terms (+0.1 each).
const RECENCY_TERMS: &[&str] = &["recent", "latest", "new", "current", "2024", "2023"];

const IMPORTANCE_WEIGHT: f64 = 0.3;
const STATISTIC_WEIGHT: f64 = 0.2;
const RECENCY_WEIGHT: f64 = 0.1;
const LENGTH_BONUS: f64 = 0.2;

/// Fragments with a character count in this range get [`LENGTH_BONUS`].
const BONUS_MIN_CHARS: usize = 50;
const BONUS_MAX_CHARS: usize = 200;

/// Score a fragment's importance in `[0, 1]`.
///
/// Each listed term contributes its weight once when it appears anywhere in
/// the lower-cased fragment (substring match). Trimmed fragments of 50 to
/// 199 characters get a length bonus. Pure function of `fragment`.
#[must_use]
pub fn score_sentence(fragment: &str) -> f64 {
    let trimmed = fragment.trim();
    let lower = trimmed.to_lowercase();

    let weighted = |terms: &[&str], weight: f64| {
        terms.iter().filter(|term| lower.contains(*term)).count() as f64 * weight
    };

    let mut score = weighted(IMPORTANCE_TERMS, IMPORTANCE_WEIGHT)
        + weighted(STATISTIC_TERMS, STATISTIC_WEIGHT)
        + weighted(RECENCY_TERMS, RECENCY_WEIGHT);

    let chars = trimmed.chars().count();
    if (BONUS_MIN_CHARS..BONUS_MAX_CHARS).contains(&chars) {
        score += LENGTH_BONUS;
    }

    score.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn plain_short_fragment_scores_zero() {
        assert!(approx(score_sentence("the sky is blue"), 0.0));
    }

    #[test]
    fn each_term_counts_once() {
        // "key" twice still adds 0.3 once.
        assert!(approx(score_sentence("key key key"), 0.3));
        assert!(approx(score_sentence("key study"), 0.5));
        assert!(approx(score_sentence("latest"), 0.1));
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        // "Mainly" contains "main", "newest" contains "new".
        assert!(approx(score_sentence("Mainly newest"), 0.4));
    }

    #[test]
    fn length_bonus_applies_in_range() {
        let fifty = "a".repeat(50);
        assert!(approx(score_sentence(&fifty), 0.2));
        let short = "a".repeat(49);
        assert!(approx(score_sentence(&short), 0.0));
        let long = "a".repeat(200);
        assert!(approx(score_sentence(&long), 0.0));
    }

    #[test]
    fn length_is_measured_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(48));
        assert!(approx(score_sentence(&padded), 0.0));
    }

    #[test]
    fn score_is_clamped_to_one() {
        let text = "important significant key major primary main crucial essential";
        assert!(approx(score_sentence(text), 1.0));
    }

    #[test]
    fn scoring_is_idempotent() {
        let fragment = " A major study found a 40 percent increase in recent adoption ";
        let first = score_sentence(fragment);
        let second = score_sentence(fragment);
        assert_eq!(first.to_bits(), second.to_bits());
        assert!(first > 0.6);
    }
}
