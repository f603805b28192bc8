//! The three independent answer-generation strategies.

use super::classify::QueryKind;
use super::facts::extract_facts;
use super::templates;

const INSIGHTS: &str = "Based on the available information, several key insights emerge that provide deeper understanding of this topic.";
const TRENDS: &str = "Current trends indicate evolving patterns and developments that are shaping the landscape of this field.";
const IMPLICATIONS: &str = "The implications of these findings suggest important considerations for future developments and applications.";

const BACKGROUND: &str = "Understanding the background context is essential for grasping the full scope and significance of this topic.";
const CURRENT_STATE: &str =
    "The current state reflects ongoing developments and established practices in this area.";
const OUTLOOK: &str = "Looking ahead, emerging trends and technological advances suggest continued evolution and new opportunities.";

/// An answer-generation approach run against the shared context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Classify, extract facts, fill the intent template.
    Factual,
    /// Insight, trend and implication narrative.
    Analytical,
    /// Background, current-state and outlook narrative.
    Contextual,
}

impl Strategy {
    /// All strategies in selection order. The first is the default winner.
    pub const ALL: [Strategy; 3] = [Self::Factual, Self::Analytical, Self::Contextual];

    /// Generate this strategy's answer.
    #[must_use]
    pub fn generate(self, query: &str, context: &str) -> String {
        match self {
            Self::Factual => {
                let kind = QueryKind::classify(query);
                let facts = extract_facts(context);
                tracing::debug!(%kind, facts = facts.len(), "factual strategy");
                templates::render(kind, query, &facts)
            }
            Self::Analytical => format!("{INSIGHTS}\n\n{TRENDS}\n\n{IMPLICATIONS}"),
            Self::Contextual => format!("{BACKGROUND}\n\n{CURRENT_STATE}\n\n{OUTLOOK}"),
        }
    }

    /// Lower-case label used in logs and errors.
    pub fn name(self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Analytical => "analytical",
            Self::Contextual => "contextual",
        }
    }
}
