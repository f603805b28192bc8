//! Query intent classification.

use serde::{Deserialize, Serialize};

/// Intent category of a query, selecting the answer template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryKind {
    /// "What is X" / "define X".
    Definition,
    /// Step-by-step instructions.
    HowTo,
    /// Comparing two or more things.
    Comparison,
    /// Recent developments or news.
    CurrentEvents,
    /// Anything else.
    General,
}

impl QueryKind {
    /// Classify `query` with ordered keyword rules on the lower-cased text.
    ///
    /// The first matching rule wins; rules are substring checks, so
    /// `"vs"` also matches inside words like `"divs"`.
    #[must_use]
    pub fn classify(query: &str) -> Self {
        let lower = query.to_lowercase();

        if lower.starts_with("what is") || lower.starts_with("define") {
            Self::Definition
        } else if lower.starts_with("how to") || lower.contains("how do") {
            Self::HowTo
        } else if ["vs", "compare", "difference"]
            .iter()
            .any(|k| lower.contains(k))
        {
            Self::Comparison
        } else if ["latest", "recent", "news"].iter().any(|k| lower.contains(k)) {
            Self::CurrentEvents
        } else {
            Self::General
        }
    }

    /// Stable label, e.g. `"how-to"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Definition => "definition",
            Self::HowTo => "how-to",
            Self::Comparison => "comparison",
            Self::CurrentEvents => "current-events",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for QueryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_whitespace_defeats_prefix_rules() {
        assert_eq!(QueryKind::classify("  What is rust"), QueryKind::General);
        assert_eq!(QueryKind::classify(" how to knit"), QueryKind::General);
    }

    #[test]
    fn canonical_examples() {
        assert_eq!(
            QueryKind::classify("What is photosynthesis?"),
            QueryKind::Definition
        );
        assert_eq!(QueryKind::classify("How to bake bread"), QueryKind::HowTo);
        assert_eq!(QueryKind::classify("React vs Vue"), QueryKind::Comparison);
        assert_eq!(
            QueryKind::classify("Latest AI news"),
            QueryKind::CurrentEvents
        );
        assert_eq!(
            QueryKind::classify("Tell me about oceans"),
            QueryKind::General
        );
    }

    #[test]
    fn define_prefix_and_how_do() {
        assert_eq!(QueryKind::classify("Define entropy"), QueryKind::Definition);
        assert_eq!(
            QueryKind::classify("So how do magnets work"),
            QueryKind::HowTo
        );
    }

    #[test]
    fn rule_order_is_respected() {
        // Definition beats comparison and current-events.
        assert_eq!(
            QueryKind::classify("What is the difference between TCP and UDP"),
            QueryKind::Definition
        );
        // Comparison beats current-events.
        assert_eq!(
            QueryKind::classify("compare the latest phones"),
            QueryKind::Comparison
        );
    }

    #[test]
    fn prefix_rules_require_start() {
        assert_eq!(
            QueryKind::classify("tell me what is going on"),
            QueryKind::General
        );
    }

    #[test]
    fn substring_matching_catches_embedded_keywords() {
        assert_eq!(QueryKind::classify("css divs layout"), QueryKind::Comparison);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&QueryKind::CurrentEvents).unwrap_or_default();
        assert_eq!(json, "\"current-events\"");
        assert_eq!(QueryKind::HowTo.to_string(), "how-to");
    }
}
