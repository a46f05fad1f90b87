//! HTML-to-text cleaning.
//!
//! Cleaning is a non-throwing capability: `Html::parse_document` recovers
//! from malformed markup, so every input yields best-effort text and nothing
//! here returns an error. Subtrees with no article content (scripts, styles,
//! navigation and page chrome) are dropped wholesale, then the remaining
//! text nodes are flattened into one space-joined string.

use scraper::{Html, Node};

/// Elements whose entire subtree is discarded before text extraction.
const STRIP_TAGS: [&str; 6] = ["script", "style", "nav", "header", "footer", "aside"];

/// Minimum cleaned-text length, in characters, for a document to be worth
/// keeping. Shorter pages are skipped with a warning and leave no artifacts.
pub const MIN_CONTENT_CHARS: usize = 100;

/// Maximum length of a derived title, in characters.
const TITLE_MAX_CHARS: usize = 120;

/// Flattens an HTML page into cleaned article text.
///
/// Text nodes under any [`STRIP_TAGS`] element are ignored. Surviving nodes
/// are trimmed, empty ones dropped, and the rest joined with single spaces.
/// Any remaining run of two or more whitespace characters collapses to one
/// space. Document structure (paragraphs, headings, lists) is not
/// preserved.
pub fn clean_html(html: &str) -> String {
    let doc = Html::parse_document(html);

    let mut parts: Vec<&str> = Vec::new();
    for node in doc.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let stripped_ancestor = node.ancestors().any(|a| match a.value() {
            Node::Element(el) => STRIP_TAGS.contains(&el.name()),
            _ => false,
        });
        if stripped_ancestor {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    collapse_whitespace(&parts.join(" "))
}

fn collapse_whitespace(text: &str) -> String {
    use regex::Regex;
    use std::sync::LazyLock;

    static RUNS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());

    RUNS_RE.replace_all(text, " ").into_owned()
}

/// Derives a display title from cleaned article text: the fragment before
/// the first period, truncated to [`TITLE_MAX_CHARS`] characters.
///
/// A stand-in until real metadata extraction exists.
pub fn derive_title(text: &str) -> String {
    let first = text.split('.').next().unwrap_or_default();
    first.chars().take(TITLE_MAX_CHARS).collect()
}
