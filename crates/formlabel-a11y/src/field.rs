//! Field discovery

use formlabel_dom::{Document, NodeId};

/// Tags that conventionally require a label
pub const FIELD_TAGS: &[&str] = &["input", "select", "textarea"];

/// Kind of form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Input,
    Select,
    Textarea,
}

impl FieldKind {
    /// Map a lower-case tag name to a field kind
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(FieldKind::Input),
            "select" => Some(FieldKind::Select),
            "textarea" => Some(FieldKind::Textarea),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Input => "input",
            FieldKind::Select => "select",
            FieldKind::Textarea => "textarea",
        }
    }
}

/// All field elements in document order
pub fn find_fields(doc: &Document) -> Vec<(NodeId, FieldKind)> {
    doc.tree()
        .descendants(doc.tree().root())
        .filter_map(|(id, node)| {
            let kind = FieldKind::from_tag(&node.as_element()?.name)?;
            Some((id, kind))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(FieldKind::from_tag("select"), Some(FieldKind::Select));
        assert_eq!(FieldKind::from_tag("button"), None);
        assert_eq!(FieldKind::Textarea.as_str(), "textarea");
    }

    #[test]
    fn test_find_fields_document_order() {
        let doc = formlabel_html::parse(
            "<textarea></textarea><div><input type=hidden><button>Go</button></div><select></select>",
        );
        let kinds: Vec<FieldKind> = find_fields(&doc).into_iter().map(|(_, k)| k).collect();
        assert_eq!(kinds, vec![FieldKind::Textarea, FieldKind::Input, FieldKind::Select]);
    }
}
