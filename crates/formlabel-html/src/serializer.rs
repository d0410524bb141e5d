//! HTML Serialization (outerHTML)
//!
//! Turns DOM subtrees back into markup for field and snippet reporting.

use formlabel_dom::{DomTree, NodeData, NodeId};

/// HTML serializer
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    /// Whether to format output with indentation
    pub pretty_print: bool,
    /// Indentation string
    pub indent: String,
}

/// Void elements (no end tag)
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Raw text elements (no escaping for content)
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self {
            pretty_print: false,
            indent: "  ".to_string(),
        }
    }
}

impl HtmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self {
            pretty_print: true,
            indent: "  ".to_string(),
        }
    }

    /// Serialize outerHTML of a node (including the node itself)
    pub fn serialize_outer(&self, tree: &DomTree, node_id: NodeId) -> String {
        let mut output = String::new();
        self.serialize_node(tree, node_id, &mut output, 0);
        output
    }

    fn serialize_node(&self, tree: &DomTree, node_id: NodeId, output: &mut String, depth: usize) {
        let Some(node) = tree.get(node_id) else {
            return;
        };

        match &node.data {
            NodeData::Document => {
                self.serialize_children(tree, node_id, output, depth);
            }
            NodeData::Element(elem) => {
                let tag = elem.name.as_str();
                let is_void = VOID_ELEMENTS.contains(&tag);
                let is_raw = RAW_TEXT_ELEMENTS.contains(&tag);

                self.newline(output, depth);

                output.push('<');
                output.push_str(tag);
                for attr in &elem.attrs {
                    output.push(' ');
                    output.push_str(&attr.name);
                    output.push_str("=\"");
                    escape_attribute(&attr.value, output);
                    output.push('"');
                }
                output.push('>');

                if is_void {
                    return;
                }

                if is_raw {
                    self.serialize_children_raw(tree, node_id, output);
                } else {
                    self.serialize_children(tree, node_id, output, depth + 1);
                }

                let has_element_child = tree.children(node_id).any(|(_, c)| c.is_element());
                if has_element_child {
                    self.newline(output, depth);
                }
                output.push_str("</");
                output.push_str(tag);
                output.push('>');
            }
            NodeData::Text(text) => {
                // Indentation replaces source whitespace in pretty mode
                if self.pretty_print && text.trim().is_empty() {
                    return;
                }
                escape_text(text, output);
            }
            NodeData::Comment(text) => {
                output.push_str("<!--");
                output.push_str(text);
                output.push_str("-->");
            }
            NodeData::Doctype { name } => {
                output.push_str("<!DOCTYPE ");
                output.push_str(name);
                output.push('>');
            }
        }
    }

    fn newline(&self, output: &mut String, depth: usize) {
        if self.pretty_print && !output.is_empty() {
            output.push('\n');
            for _ in 0..depth {
                output.push_str(&self.indent);
            }
        }
    }

    fn serialize_children(&self, tree: &DomTree, parent_id: NodeId, output: &mut String, depth: usize) {
        for (child_id, _) in tree.children(parent_id) {
            self.serialize_node(tree, child_id, output, depth);
        }
    }

    fn serialize_children_raw(&self, tree: &DomTree, parent_id: NodeId, output: &mut String) {
        for (_, child) in tree.children(parent_id) {
            if let Some(text) = child.as_text() {
                output.push_str(text);
            }
        }
    }
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formlabel_dom::ElementData;

    fn field_tree() -> (DomTree, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let p = tree.create_element(ElementData::new("p"));
        let text = tree.create_text("A & B");
        let input = tree.create_element(
            ElementData::new("input")
                .with_attr("type", "text")
                .with_attr("value", "\"quoted\""),
        );
        tree.append_child(tree.root(), p);
        tree.append_child(p, text);
        tree.append_child(p, input);
        (tree, p, input)
    }

    #[test]
    fn test_void_element_has_no_end_tag() {
        let (tree, _, input) = field_tree();
        let html = HtmlSerializer::new().serialize_outer(&tree, input);
        assert_eq!(html, r#"<input type="text" value="&quot;quoted&quot;">"#);
    }

    #[test]
    fn test_compact_outer() {
        let (tree, p, _) = field_tree();
        let html = HtmlSerializer::new().serialize_outer(&tree, p);
        assert_eq!(html, r#"<p>A &amp; B<input type="text" value="&quot;quoted&quot;"></p>"#);
    }

    #[test]
    fn test_pretty_outer_indents_children() {
        let (tree, p, _) = field_tree();
        let html = HtmlSerializer::pretty().serialize_outer(&tree, p);
        assert_eq!(
            html,
            "<p>A &amp; B\n  <input type=\"text\" value=\"&quot;quoted&quot;\">\n</p>"
        );
    }

    #[test]
    fn test_whitespace_text_only_in_compact() {
        let mut tree = DomTree::new();
        let div = tree.create_element(ElementData::new("div"));
        let gap = tree.create_text("\n    ");
        let input = tree.create_element(ElementData::new("input"));
        tree.append_child(tree.root(), div);
        tree.append_child(div, gap);
        tree.append_child(div, input);

        assert_eq!(HtmlSerializer::new().serialize_outer(&tree, div), "<div>\n    <input></div>");
        assert_eq!(HtmlSerializer::pretty().serialize_outer(&tree, div), "<div>\n  <input>\n</div>");
    }

    #[test]
    fn test_empty_attribute_keeps_quotes() {
        let mut tree = DomTree::new();
        let input = tree.create_element(ElementData::new("input").with_attr("aria-label", ""));
        tree.append_child(tree.root(), input);
        assert_eq!(
            HtmlSerializer::new().serialize_outer(&tree, input),
            r#"<input aria-label="">"#
        );
    }
}
