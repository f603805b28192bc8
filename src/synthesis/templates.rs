//! Per-intent answer templates.
//!
//! Each template slices fixed index ranges out of the fact list. Missing
//! facts shrink or empty the corresponding section; rendering never fails.

use super::classify::QueryKind;
use super::facts::FactFragment;

/// Render the answer template for `kind`.
#[must_use]
pub fn render(kind: QueryKind, query: &str, facts: &[FactFragment]) -> String {
    match kind {
        QueryKind::Definition => definition(query, facts),
        QueryKind::HowTo => how_to(query, facts),
        QueryKind::Comparison => comparison(query, facts),
        QueryKind::CurrentEvents => current_events(query, facts),
        QueryKind::General => general(query, facts),
    }
}

fn definition(query: &str, facts: &[FactFragment]) -> String {
    let subject = strip_prefix_ignore_case(query, &["what is", "define"]).trim();
    format!(
        "{subject} refers to {} \n\nKey characteristics include:\n{}\n\nThis concept is significant because {}",
        joined(facts, 0, 3),
        bullets(facts, 3, 6),
        joined(facts, 6, 8),
    )
}

fn how_to(query: &str, facts: &[FactFragment]) -> String {
    let task = strip_prefix_ignore_case(query, &["how to"]);
    let steps = window(facts, 0, 5)
        .iter()
        .enumerate()
        .map(|(i, fact)| format!("{}. {}", i + 1, fact.text))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!(
        "To {task}, follow these key approaches:\n\n{steps}\n\nAdditional considerations:\n{}",
        bullets(facts, 5, 8),
    )
}

fn comparison(query: &str, facts: &[FactFragment]) -> String {
    format!(
        "Regarding {query}, here's a comprehensive comparison:\n\nKey differences:\n{}\n\nSimilarities:\n{}\n\nPractical implications:\n{}",
        bullets(facts, 0, 4),
        bullets(facts, 4, 6),
        joined(facts, 6, 8),
    )
}

fn current_events(query: &str, facts: &[FactFragment]) -> String {
    format!(
        "Latest developments regarding {query}:\n\nRecent updates:\n{}\n\nCurrent status:\n{}\n\nFuture outlook:\n{}",
        bullets(facts, 0, 3),
        joined(facts, 3, 5),
        joined(facts, 5, 7),
    )
}

fn general(query: &str, facts: &[FactFragment]) -> String {
    format!(
        "Based on current information about {query}:\n\n{}\n\nKey aspects include:\n{}\n\nThis is significant because {}",
        joined(facts, 0, 2),
        bullets(facts, 2, 6),
        joined(facts, 6, 8),
    )
}

/// `facts[start..end]`, clamped to the available length.
fn window(facts: &[FactFragment], start: usize, end: usize) -> &[FactFragment] {
    let end = end.min(facts.len());
    let start = start.min(end);
    &facts[start..end]
}

fn joined(facts: &[FactFragment], start: usize, end: usize) -> String {
    window(facts, start, end)
        .iter()
        .map(|f| f.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn bullets(facts: &[FactFragment], start: usize, end: usize) -> String {
    window(facts, start, end)
        .iter()
        .map(|f| format!("• {}", f.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Remove the first matching ASCII-case-insensitive prefix and any
/// whitespace after it.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        if let Some(head) = text.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return text[prefix.len()..].trim_start();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(n: usize) -> Vec<FactFragment> {
        (0..n)
            .map(|i| FactFragment {
                text: format!("fact{i}"),
                score: 0.8,
            })
            .collect()
    }

    #[test]
    fn definition_uses_subject_and_slices() {
        let text = render(QueryKind::Definition, "What is quantum computing?", &facts(8));
        assert_eq!(
            text,
            "quantum computing? refers to fact0 fact1 fact2 \n\n\
             Key characteristics include:\n• fact3\n• fact4\n• fact5\n\n\
             This concept is significant because fact6 fact7"
        );
    }

    #[test]
    fn definition_prefix_is_case_insensitive() {
        let text = render(QueryKind::Definition, "DEFINE   entropy", &[]);
        assert!(text.starts_with("entropy refers to"));
    }

    #[test]
    fn how_to_numbers_steps() {
        let text = render(QueryKind::HowTo, "How to bake bread", &facts(6));
        assert!(text.starts_with("To bake bread, follow these key approaches:\n\n1. fact0\n\n2. fact1"));
        assert!(text.contains("5. fact4"));
        assert!(text.ends_with("Additional considerations:\n• fact5"));
    }

    #[test]
    fn comparison_sections() {
        let text = render(QueryKind::Comparison, "React vs Vue", &facts(7));
        assert!(text.starts_with("Regarding React vs Vue, here's a comprehensive comparison:"));
        assert!(text.contains("Key differences:\n• fact0\n• fact1\n• fact2\n• fact3\n\n"));
        assert!(text.contains("Similarities:\n• fact4\n• fact5\n\n"));
        assert!(text.ends_with("Practical implications:\nfact6"));
    }

    #[test]
    fn current_events_sections() {
        let text = render(QueryKind::CurrentEvents, "Latest AI news", &facts(10));
        assert!(text.contains("Recent updates:\n• fact0\n• fact1\n• fact2\n\n"));
        assert!(text.contains("Current status:\nfact3 fact4\n\n"));
        assert!(text.ends_with("Future outlook:\nfact5 fact6"));
    }

    #[test]
    fn general_with_no_facts_degrades_to_headings() {
        let text = render(QueryKind::General, "oceans", &[]);
        assert_eq!(
            text,
            "Based on current information about oceans:\n\n\n\n\
             Key aspects include:\n\n\nThis is significant because "
        );
    }

    #[test]
    fn short_fact_lists_thin_out_sections() {
        let text = render(QueryKind::Definition, "define rust", &facts(2));
        assert!(text.starts_with("rust refers to fact0 fact1 \n\n"));
        assert!(text.contains("Key characteristics include:\n\n\n"));
    }

    #[test]
    fn multibyte_query_does_not_panic() {
        let text = render(QueryKind::Definition, "é", &[]);
        assert!(text.starts_with("é refers to"));
    }
}
