//! Readable text from HTML pages.
//!
//! A page is reduced to the text of its first preferred content region
//! (falling back to `<body>`), skipping anything inside `script`, `style`
//! or `noscript`. Whitespace is collapsed and the result capped by chars.

use scraper::{ElementRef, Html, Selector};

/// Regions preferred on the scraping-provider path. One selector group, so
/// the first match in document order wins.
pub const API_CONTENT_SELECTORS: &str = "main, article, .content, #content";

/// Regions preferred on the direct-fetch path.
pub const DIRECT_CONTENT_SELECTORS: &str = "main, article";

/// Elements whose text never counts as readable.
const NON_TEXT_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Extract at most `max_chars` characters of readable text from `html`.
///
/// Uses the first element matching `content_selectors` when it has any
/// visible text, otherwise the whole body. Returns an empty string when
/// nothing readable remains.
pub fn extract_text(html: &str, content_selectors: &str, max_chars: usize) -> String {
    let document = Html::parse_document(html);

    let region = region_text(&document, content_selectors)
        .filter(|text| !text.trim().is_empty())
        .or_else(|| region_text(&document, "body"))
        .unwrap_or_default();

    truncate_chars(&normalise_whitespace(&region), max_chars)
}

fn region_text(document: &Html, selectors: &str) -> Option<String> {
    let selector = Selector::parse(selectors).ok()?;
    document.select(&selector).next().map(visible_text)
}

/// Concatenated text nodes under `root`, minus non-text element subtrees.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in root.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| NON_TEXT_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            text.push_str(fragment);
            text.push(' ');
        }
    }
    text
}

/// Collapse whitespace runs to one space, or to a blank line when the run
/// spans two or more newlines. Leading and trailing whitespace is dropped.
fn normalise_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;
    let mut newlines = 0u32;

    for ch in text.chars() {
        if ch.is_whitespace() {
            in_gap = true;
            if ch == '\n' {
                newlines += 1;
            }
            continue;
        }
        if in_gap && !out.is_empty() {
            out.push_str(if newlines >= 2 { "\n\n" } else { " " });
        }
        in_gap = false;
        newlines = 0;
        out.push(ch);
    }
    out
}

/// Keep at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_owned(),
        None => text.to_owned(),
    }
}
