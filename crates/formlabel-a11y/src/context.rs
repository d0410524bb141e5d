//! Snippet and context extraction
//!
//! Gives a reviewer enough surrounding markup and text to find a field
//! in situ without dumping the whole document.

use formlabel_dom::{DomTree, NodeId};
use formlabel_html::HtmlSerializer;

/// Phrasing elements too small to serve as a snippet container
const INLINE_CONTAINERS: &[&str] = &[
    "label", "span", "a", "b", "i", "em", "strong", "small", "font",
    "abbr", "code", "q", "sub", "sup", "u",
];

/// Elements that bound the upward search
const DOCUMENT_LEVEL: &[&str] = &["body", "html"];

/// Ancestor levels searched for context text when the parent has none
const CONTEXT_MAX_DEPTH: usize = 3;

/// Marker appended to truncated output
const TRUNCATION_MARKER: &str = "...";

/// Nearest meaningful container of `field`: its parent element, or the
/// first non-inline ancestor when the parent is phrasing content.
/// Never climbs past `body`.
pub fn snippet_container(tree: &DomTree, field: NodeId) -> Option<NodeId> {
    let mut container = tree.parent_element(field)?;
    loop {
        let Some(elem) = tree.element(container) else {
            return Some(container);
        };
        if !INLINE_CONTAINERS.contains(&elem.name.as_str()) {
            return Some(container);
        }
        match tree.parent_element(container) {
            Some(up) if !tree.element(up).is_some_and(|e| DOCUMENT_LEVEL.contains(&e.name.as_str())) => {
                container = up;
            }
            _ => return Some(container),
        }
    }
}

/// Pretty-printed markup of the snippet container, bounded to `max_chars`.
/// Falls back to the field's own markup when it has no parent element.
pub fn snippet(tree: &DomTree, field: NodeId, max_chars: usize) -> String {
    let target = snippet_container(tree, field).unwrap_or(field);
    let markup = HtmlSerializer::pretty().serialize_outer(tree, target);
    truncate(&markup, max_chars)
}

/// Plain-text hint for the field's purpose.
///
/// Uses the associated label's text when there is one, otherwise the
/// parent's text, climbing a few levels if that is empty. Document-level
/// elements are never used as a source.
pub fn context(tree: &DomTree, field: NodeId, label: Option<NodeId>, max_chars: usize) -> String {
    if let Some(label) = label {
        let text = collapse_text(tree, label);
        if !text.is_empty() {
            return truncate(&text, max_chars);
        }
    }

    for ancestor in tree.ancestors(field).take(CONTEXT_MAX_DEPTH) {
        if tree.element(ancestor).is_some_and(|e| DOCUMENT_LEVEL.contains(&e.name.as_str())) {
            break;
        }
        let text = collapse_text(tree, ancestor);
        if !text.is_empty() {
            return truncate(&text, max_chars);
        }
    }

    String::new()
}

/// Descendant text of `id`, trimmed, with runs of whitespace collapsed to
/// one space. Words split only by markup (`<b>E</b>mail`) stay joined.
pub fn collapse_text(tree: &DomTree, id: NodeId) -> String {
    tree.text_content(id).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `s` to at most `max_chars` characters, marking the cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        None => s.to_string(),
        Some((byte_idx, _)) => {
            let mut out = s[..byte_idx].to_string();
            out.push_str(TRUNCATION_MARKER);
            out
        }
    }
}
