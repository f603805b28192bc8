//! Deterministic offline sources used when every network provider fails.
//!
//! One of six fixed topic bundles is chosen by keyword match against the
//! lower-cased query; each yields six Wikipedia-style references with
//! relevance `1 - index * 0.15`.

use crate::types::{rank_relevance, Source};

/// Relevance decrement per rank position.
const RELEVANCE_STEP: f64 = 0.15;

/// Topic bundle selected for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicBundle {
    /// Artificial intelligence and machine learning.
    ArtificialIntelligence,
    /// Science and physics.
    Science,
    /// Health and medicine.
    Health,
    /// Technology and software.
    Technology,
    /// Business and economy.
    Business,
    /// Query-templated generic bundle.
    General,
}

/// Keyword rules, evaluated in order; the first bundle with any matching
/// keyword wins.
const BUNDLE_KEYWORDS: &[(TopicBundle, &[&str])] = &[
    (
        TopicBundle::ArtificialIntelligence,
        &["ai", "artificial intelligence", "machine learning"],
    ),
    (TopicBundle::Science, &["quantum", "physics", "science"]),
    (TopicBundle::Health, &["health", "medicine", "medical"]),
    (
        TopicBundle::Technology,
        &["technology", "tech", "software", "programming"],
    ),
    (
        TopicBundle::Business,
        &["business", "economy", "finance", "market"],
    ),
];

const AI_TOPICS: [(&str, &str); 6] = [
    ("Artificial Intelligence Overview", "Comprehensive guide to AI technologies, applications, and future prospects in various industries."),
    ("Machine Learning Fundamentals", "Core concepts of ML algorithms, neural networks, and their practical implementations."),
    ("Deep Learning Applications", "Advanced AI techniques using deep neural networks for complex problem solving."),
    ("AI Ethics and Safety", "Important considerations for responsible AI development and deployment."),
    ("Natural Language Processing", "AI techniques for understanding and generating human language."),
    ("Computer Vision Technology", "AI systems that can interpret and analyze visual information from images and videos."),
];

const SCIENCE_TOPICS: [(&str, &str); 6] = [
    ("Quantum Computing Advances", "Latest breakthroughs in quantum computing technology and their implications for the future."),
    ("Quantum Physics Principles", "Fundamental concepts of quantum mechanics and their real-world applications in technology."),
    ("Scientific Research Methods", "Modern approaches to scientific inquiry, experimental design, and peer review processes."),
    ("Technology Innovation Trends", "Emerging technologies shaping the future of science and industry development."),
    ("Space Exploration Updates", "Recent discoveries and missions in space exploration and astronomical research."),
    ("Climate Science Research", "Current understanding of climate change, environmental science, and sustainability solutions."),
];

const HEALTH_TOPICS: [(&str, &str); 6] = [
    ("Modern Healthcare Innovations", "Cutting-edge medical technologies, treatments, and healthcare delivery systems."),
    ("Preventive Medicine Strategies", "Evidence-based approaches to disease prevention, health screening, and wellness programs."),
    ("Mental Health Awareness", "Understanding mental health conditions, treatment options, and support resources available."),
    ("Nutrition and Wellness", "Scientific insights into optimal nutrition, exercise, and lifestyle choices for health."),
    ("Medical Research Breakthroughs", "Recent advances in medical research, drug development, and treatment methodologies."),
    ("Public Health Initiatives", "Community health programs, disease prevention strategies, and healthcare policy developments."),
];

const TECHNOLOGY_TOPICS: [(&str, &str); 6] = [
    ("Software Development Trends", "Latest programming languages, frameworks, and development methodologies in the tech industry."),
    ("Cybersecurity Best Practices", "Essential security measures, threat prevention, and data protection strategies for organizations."),
    ("Cloud Computing Solutions", "Modern cloud platforms, services, and infrastructure for scalable business applications."),
    ("Mobile Technology Evolution", "Advances in mobile devices, applications, and wireless communication technologies."),
    ("Internet of Things (IoT)", "Connected devices, smart systems, and the integration of physical and digital worlds."),
    ("Blockchain and Cryptocurrency", "Distributed ledger technology, digital currencies, and their applications beyond finance."),
];

const BUSINESS_TOPICS: [(&str, &str); 6] = [
    ("Global Economic Trends", "Current economic indicators, market analysis, and international trade developments."),
    ("Digital Transformation", "How businesses are adapting to digital technologies and changing consumer behaviors."),
    ("Sustainable Business Practices", "Corporate responsibility, environmental sustainability, and ethical business operations."),
    ("Financial Technology (FinTech)", "Innovation in financial services, digital payments, and investment technologies."),
    ("Entrepreneurship and Startups", "Business creation, venture capital, and innovation in emerging markets and industries."),
    ("Supply Chain Management", "Modern logistics, inventory management, and global supply chain optimization strategies."),
];

impl TopicBundle {
    /// Select the bundle for `query` by keyword containment on the
    /// lower-cased query. Matching is substring-based, so `"ai"` also
    /// matches inside longer words.
    pub fn for_query(query: &str) -> Self {
        let lower = query.to_lowercase();
        BUNDLE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(bundle, _)| *bundle)
            .unwrap_or(Self::General)
    }

    /// The six `(title, description)` pairs for this bundle.
    pub fn topics(self, query: &str) -> Vec<(String, String)> {
        let fixed = match self {
            Self::ArtificialIntelligence => &AI_TOPICS,
            Self::Science => &SCIENCE_TOPICS,
            Self::Health => &HEALTH_TOPICS,
            Self::Technology => &TECHNOLOGY_TOPICS,
            Self::Business => &BUSINESS_TOPICS,
            Self::General => return general_topics(query),
        };
        fixed
            .iter()
            .map(|(title, description)| ((*title).to_owned(), (*description).to_owned()))
            .collect()
    }
}

fn general_topics(query: &str) -> Vec<(String, String)> {
    vec![
        (
            format!("Understanding {query}"),
            format!("Comprehensive overview of {query} and its key aspects, applications, and significance in today's world."),
        ),
        (
            format!("{query} Research and Development"),
            format!("Latest research findings, academic studies, and developments in the field of {query}."),
        ),
        (
            format!("{query} Applications and Uses"),
            format!("Practical applications and real-world uses of {query} across different sectors and industries."),
        ),
        (
            format!("Future of {query}"),
            format!("Emerging trends, future prospects, and potential developments related to {query} and its evolution."),
        ),
        (
            format!("{query} Best Practices"),
            format!("Recommended approaches, methodologies, and standards for working with or understanding {query}."),
        ),
        (
            format!("{query} Case Studies"),
            format!("Real-world examples, success stories, and lessons learned from implementations of {query}."),
        ),
    ]
}

/// Build the offline source set for `query`, at most `count` entries.
pub fn fallback_sources(query: &str, count: usize) -> Vec<Source> {
    let bundle = TopicBundle::for_query(query);
    tracing::debug!(?bundle, "using offline fallback sources");

    bundle
        .topics(query)
        .into_iter()
        .take(count)
        .enumerate()
        .filter_map(|(index, (title, description))| {
            let url = wiki_url(&title);
            Source::new(format!("fallback-{index}"), title, url, description)
                .map(|s| s.with_relevance(rank_relevance(index, RELEVANCE_STEP)))
        })
        .collect()
}

/// Wikipedia article URL for `title`, with whitespace runs turned into `_`.
fn wiki_url(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('_');
            }
            in_space = true;
        } else {
            slug.push(ch);
            in_space = false;
        }
    }
    format!("https://en.wikipedia.org/wiki/{}", urlencoding::encode(&slug))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_selection_by_keyword() {
        assert_eq!(
            TopicBundle::for_query("Machine learning basics"),
            TopicBundle::ArtificialIntelligence
        );
        assert_eq!(
            TopicBundle::for_query("What is quantum computing?"),
            TopicBundle::Science
        );
        assert_eq!(TopicBundle::for_query("Medical imaging"), TopicBundle::Health);
        assert_eq!(
            TopicBundle::for_query("Rust programming"),
            TopicBundle::Technology
        );
        assert_eq!(
            TopicBundle::for_query("stock market outlook"),
            TopicBundle::Business
        );
        assert_eq!(TopicBundle::for_query("Tell me about oceans"), TopicBundle::General);
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // "ai" is a substring of "said" and the AI rule is checked first.
        assert_eq!(
            TopicBundle::for_query("what she said about physics"),
            TopicBundle::ArtificialIntelligence
        );
    }

    #[test]
    fn every_bundle_has_six_topics() {
        for bundle in [
            TopicBundle::ArtificialIntelligence,
            TopicBundle::Science,
            TopicBundle::Health,
            TopicBundle::Technology,
            TopicBundle::Business,
            TopicBundle::General,
        ] {
            assert_eq!(bundle.topics("x").len(), 6, "{bundle:?}");
        }
    }

    #[test]
    fn quantum_query_yields_science_bundle() {
        let sources = fallback_sources("What is quantum computing?", 8);
        assert_eq!(sources.len(), 6);
        assert_eq!(sources[0].title, "Quantum Computing Advances");
        assert_eq!(
            sources[0].url,
            "https://en.wikipedia.org/wiki/Quantum_Computing_Advances"
        );
        assert_eq!(sources[0].domain, "en.wikipedia.org");
        assert_eq!(sources[5].id, "fallback-5");
    }

    #[test]
    fn relevance_strictly_decreases() {
        let sources = fallback_sources("anything at all", 8);
        assert_eq!(sources.len(), 6);
        for pair in sources.windows(2) {
            let a = pair[0].relevance_score.expect("score");
            let b = pair[1].relevance_score.expect("score");
            assert!(a > b, "{a} should exceed {b}");
        }
        let last = sources[5].relevance_score.expect("score");
        assert!((last - 0.25).abs() < 1e-9);
    }

    #[test]
    fn general_bundle_is_templated_on_query() {
        let sources = fallback_sources("deep sea vents", 8);
        assert_eq!(sources[0].title, "Understanding deep sea vents");
        assert_eq!(
            sources[0].url,
            "https://en.wikipedia.org/wiki/Understanding_deep_sea_vents"
        );
        assert!(sources[1].snippet.contains("deep sea vents"));
    }

    #[test]
    fn count_truncates_bundle() {
        assert_eq!(fallback_sources("oceans", 3).len(), 3);
        assert!(fallback_sources("oceans", 0).is_empty());
    }

    #[test]
    fn wiki_url_encodes_special_characters() {
        assert_eq!(
            wiki_url("Internet of Things (IoT)"),
            "https://en.wikipedia.org/wiki/Internet_of_Things_%28IoT%29"
        );
        assert_eq!(wiki_url("a   b"), "https://en.wikipedia.org/wiki/a_b");
    }
}
