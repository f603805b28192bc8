//! Follow-up question generation.

/// Maximum follow-up questions returned.
pub const MAX_FOLLOW_UPS: usize = 3;

/// Tokens longer than this many characters are preferred as the anchor.
const ANCHOR_MIN_CHARS: usize = 4;

/// Build up to three follow-up questions anchored on the query's first
/// token longer than four characters (or its first token).
#[must_use]
pub fn follow_up_questions(query: &str) -> Vec<String> {
    let lower = query.to_lowercase();
    let tokens: Vec<&str> = lower.split(' ').collect();
    let topic = tokens
        .iter()
        .find(|t| t.chars().count() > ANCHOR_MIN_CHARS)
        .or_else(|| tokens.first())
        .copied()
        .unwrap_or_default();

    let mut questions = vec![
        format!("What are the latest developments in {topic}?"),
        format!("How does {topic} impact different industries?"),
        format!("What are the challenges and limitations of {topic}?"),
        format!("What does the future hold for {topic}?"),
        format!("How can someone get started with {topic}?"),
    ];
    questions.truncate(MAX_FOLLOW_UPS);
    questions
}

/// Generic follow-ups used with the fallback answer.
pub(crate) fn generic_follow_ups(query: &str) -> Vec<String> {
    vec![
        format!("What are the key principles of {query}?"),
        format!("How is {query} being applied today?"),
        format!("What are the future prospects for {query}?"),
    ]
}
