//! Label association
//!
//! Resolution order: explicit `label[for]`, enclosing `label`, `aria-label`,
//! `aria-describedby`. The first mechanism that resolves wins.

use std::collections::{HashMap, HashSet};

use formlabel_dom::{Document, DomTree, NodeId};

/// How a field got its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    /// `<label for="id">` elsewhere in the document
    Explicit,
    /// Field is a descendant of a `<label>`
    Implicit,
    /// Non-blank `aria-label` on the field
    AriaLabel,
    /// `aria-describedby` naming an existing element
    AriaDescribedBy,
}

/// A resolved association
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAssociation {
    pub source: LabelSource,
    /// The `<label>` element for explicit and implicit associations
    pub label: Option<NodeId>,
}

/// Per-document lookup tables for `label[for]` and element ids.
///
/// Built once per analysis so each field resolves without rescanning
/// the document.
#[derive(Debug, Default)]
pub struct LabelIndex {
    /// `for` value -> first `<label>` in document order
    labels_by_for: HashMap<String, NodeId>,
    /// Every non-empty `id` in the document
    ids: HashSet<String>,
}

impl LabelIndex {
    pub fn build(doc: &Document) -> Self {
        let mut index = Self::default();
        for (id, node) in doc.tree().descendants(doc.tree().root()) {
            let Some(elem) = node.as_element() else {
                continue;
            };
            if let Some(value) = elem.id() {
                index.ids.insert(value.to_string());
            }
            if elem.is("label") {
                if let Some(target) = elem.get_attr("for").filter(|t| !t.is_empty()) {
                    index.labels_by_for.entry(target.to_string()).or_insert(id);
                }
            }
        }
        index
    }

    /// First `<label>` whose `for` equals `id` exactly
    pub fn label_for(&self, id: &str) -> Option<NodeId> {
        self.labels_by_for.get(id).copied()
    }

    /// Whether any element carries this exact `id`
    pub fn has_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Resolve the label association of `field`, if any
    pub fn resolve(&self, tree: &DomTree, field: NodeId) -> Option<LabelAssociation> {
        let elem = tree.element(field)?;

        if let Some(label) = elem.id().and_then(|id| self.label_for(id)) {
            return Some(LabelAssociation {
                source: LabelSource::Explicit,
                label: Some(label),
            });
        }

        if let Some(label) = enclosing_label(tree, field) {
            return Some(LabelAssociation {
                source: LabelSource::Implicit,
                label: Some(label),
            });
        }

        // Blank aria-label is the same as no aria-label
        if elem.get_attr("aria-label").is_some_and(|v| !v.trim().is_empty()) {
            return Some(LabelAssociation {
                source: LabelSource::AriaLabel,
                label: None,
            });
        }

        let described = elem
            .get_attr("aria-describedby")
            .is_some_and(|refs| refs.split_ascii_whitespace().any(|r| self.has_id(r)));
        if described {
            return Some(LabelAssociation {
                source: LabelSource::AriaDescribedBy,
                label: None,
            });
        }

        None
    }
}

/// Nearest `<label>` ancestor of `field`
pub fn enclosing_label(tree: &DomTree, field: NodeId) -> Option<NodeId> {
    tree.ancestors(field)
        .find(|&id| tree.element(id).is_some_and(|e| e.is("label")))
}

/// Resolve a single field. Builds a fresh index; prefer `LabelIndex` when
/// resolving many fields of one document.
pub fn resolve_label(doc: &Document, field: NodeId) -> Option<LabelAssociation> {
    LabelIndex::build(doc).resolve(doc.tree(), field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formlabel_html::parse;

    fn resolve_by_id(html: &str, id: &str) -> Option<LabelAssociation> {
        let doc = parse(html);
        let field = doc.get_element_by_id(id).expect("field");
        resolve_label(&doc, field)
    }

    #[test]
    fn test_explicit() {
        let assoc = resolve_by_id(r#"<input id="n"><label for="n">Name</label>"#, "n").unwrap();
        assert_eq!(assoc.source, LabelSource::Explicit);
        assert!(assoc.label.is_some());
    }

    #[test]
    fn test_explicit_is_case_sensitive() {
        assert!(resolve_by_id(r#"<input id="Name"><label for="name">Name</label>"#, "Name").is_none());
    }

    #[test]
    fn test_explicit_no_whitespace_normalization() {
        assert!(resolve_by_id(r#"<input id="n"><label for=" n">Name</label>"#, "n").is_none());
    }

    #[test]
    fn test_explicit_first_label_wins() {
        let doc = parse(r#"<label for="x" id="first">A</label><label for="x">B</label><input id="x">"#);
        let field = doc.get_element_by_id("x").unwrap();
        let assoc = resolve_label(&doc, field).unwrap();
        assert_eq!(assoc.label, doc.get_element_by_id("first"));
    }

    #[test]
    fn test_implicit_nearest_label() {
        let doc = parse(r#"<label id="outer">A<span><input id="f"></span></label>"#);
        let field = doc.get_element_by_id("f").unwrap();
        let assoc = resolve_label(&doc, field).unwrap();
        assert_eq!(assoc.source, LabelSource::Implicit);
        assert_eq!(assoc.label, doc.get_element_by_id("outer"));
    }

    #[test]
    fn test_implicit_innermost_of_nested_labels() {
        let doc = parse(r#"<label id="outer">Outer <label id="inner">Inner <input id="f"></label></label>"#);
        let field = doc.get_element_by_id("f").unwrap();
        let inner = doc.get_element_by_id("inner").expect("inner label");
        assert_eq!(doc.tree().parent_element(field), Some(inner));

        let assoc = resolve_label(&doc, field).unwrap();
        assert_eq!(assoc.source, LabelSource::Implicit);
        assert_eq!(assoc.label, Some(inner));
    }

    #[test]
    fn test_explicit_takes_precedence_over_implicit() {
        let assoc = resolve_by_id(
            r#"<label>Wrapper <input id="f"></label><label for="f">Real</label>"#,
            "f",
        )
        .unwrap();
        assert_eq!(assoc.source, LabelSource::Explicit);
    }

    #[test]
    fn test_aria_label() {
        let assoc = resolve_by_id(r#"<input id="f" aria-label="Search">"#, "f").unwrap();
        assert_eq!(assoc.source, LabelSource::AriaLabel);
        assert_eq!(assoc.label, None);
    }

    #[test]
    fn test_blank_aria_label_does_not_count() {
        assert!(resolve_by_id(r#"<input id="f" aria-label="">"#, "f").is_none());
        assert!(resolve_by_id(r#"<input id="f" aria-label="   ">"#, "f").is_none());
    }

    #[test]
    fn test_aria_describedby_requires_existing_target() {
        assert!(resolve_by_id(r#"<input id="f" aria-describedby="missing">"#, "f").is_none());

        let assoc = resolve_by_id(
            r#"<input id="f" aria-describedby="missing hint"><p id="hint"></p>"#,
            "f",
        )
        .unwrap();
        assert_eq!(assoc.source, LabelSource::AriaDescribedBy);
    }

    #[test]
    fn test_label_for_empty_id_never_matches() {
        let doc = parse(r#"<label for="">Empty</label><input id="">"#);
        let field = doc.elements_by_tag(&["input"])[0];
        assert!(resolve_label(&doc, field).is_none());
    }
}
