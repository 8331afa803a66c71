//! Markup stripping for feed descriptions and content blocks.

use scraper::{Html, Node};

/// Element names whose subtrees are dropped from content text.
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Strip every tag from an HTML fragment.
///
/// Each text node is trimmed; empty nodes are dropped and the rest are
/// joined with a single space. Script and style text is kept.
pub fn html_to_text(fragment: &str) -> String {
    collect_text(fragment, false)
}

/// Like [`html_to_text`], but text inside `<script>` and `<style>` elements
/// is removed along with the tags.
pub fn html_to_text_without_scripts(fragment: &str) -> String {
    collect_text(fragment, true)
}

fn collect_text(fragment: &str, skip_scripts: bool) -> String {
    let document = Html::parse_fragment(fragment);
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        if skip_scripts
            && node.ancestors().any(|ancestor| match ancestor.value() {
                Node::Element(element) => SKIPPED_ELEMENTS.contains(&element.name()),
                _ => false,
            })
        {
            continue;
        }
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
