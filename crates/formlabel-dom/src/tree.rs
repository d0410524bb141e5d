//! DOM Tree (arena-based allocation)

use crate::{ElementData, Node, NodeData, NodeId};

/// Arena-based DOM tree. Slot 0 is always the document node.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
        }
    }

    /// Document node ID
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get element data for `id`, if it is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree is empty (only the document node)
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element node
    pub fn create_element(&mut self, elem: ElementData) -> NodeId {
        self.push(NodeData::Element(elem))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    /// Create a detached comment node
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Comment(text.to_string()))
    }

    /// Create a detached doctype node
    pub fn create_doctype(&mut self, name: &str) -> NodeId {
        self.push(NodeData::Doctype { name: name.to_string() })
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// Ignored if either ID is out of range or `child` is already attached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child
            || parent.index() >= self.nodes.len()
            || child.index() >= self.nodes.len()
            || self.nodes[child.index()].parent.is_valid()
        {
            tracing::debug!("append_child({:?}, {:?}) ignored", parent, child);
            return;
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let c = &mut self.nodes[child.index()];
            c.parent = parent;
            c.prev_sibling = last;
            c.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
    }

    /// Parent of `id`, if any
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.parent).filter(|p| p.is_valid())
    }

    /// Nearest ancestor that is an element
    pub fn parent_element(&self, id: NodeId) -> Option<NodeId> {
        self.ancestors(id).next()
    }

    /// Direct children of `id`, in order
    pub fn children(&self, id: NodeId) -> Children<'_> {
        let next = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Children { tree: self, next }
    }

    /// Element ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = self.get(id).map(|n| n.parent).unwrap_or(NodeId::NONE);
        Ancestors { tree: self, next }
    }

    /// All descendants of `id` in document (pre-)order, excluding `id`
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let first = self.get(id).map(|n| n.first_child).unwrap_or(NodeId::NONE);
        Descendants { tree: self, root: id, next: first }
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            out.push_str(text);
        }
        for (_, node) in self.descendants(id) {
            if let Some(text) = node.as_text() {
                out.push_str(text);
            }
        }
        out
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over direct children
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

/// Iterator walking up through element ancestors
pub struct Ancestors<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.next;
            let node = self.tree.get(id)?;
            self.next = node.parent;
            if node.is_element() {
                return Some(id);
            }
        }
    }
}

/// Pre-order iterator bounded to one subtree
pub struct Descendants<'a> {
    tree: &'a DomTree,
    root: NodeId,
    next: NodeId,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;

        self.next = if node.first_child.is_valid() {
            node.first_child
        } else {
            // Climb until a next sibling exists, stopping at the subtree root
            let mut cur = id;
            loop {
                if cur == self.root {
                    break NodeId::NONE;
                }
                let Some(n) = self.tree.get(cur) else {
                    break NodeId::NONE;
                };
                if n.next_sibling.is_valid() {
                    break n.next_sibling;
                }
                if n.parent == self.root {
                    break NodeId::NONE;
                }
                cur = n.parent;
            }
        };

        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
        // <form><label>Name<input></label><select></select></form>
        let mut tree = DomTree::new();
        let form = tree.create_element(ElementData::new("form"));
        let label = tree.create_element(ElementData::new("label"));
        let text = tree.create_text("Name");
        let input = tree.create_element(ElementData::new("input"));
        let select = tree.create_element(ElementData::new("select"));
        tree.append_child(tree.root(), form);
        tree.append_child(form, label);
        tree.append_child(label, text);
        tree.append_child(label, input);
        tree.append_child(form, select);
        (tree, form, label, input, select)
    }

    #[test]
    fn test_children_in_order() {
        let (tree, form, label, _, select) = sample();
        let ids: Vec<NodeId> = tree.children(form).map(|(id, _)| id).collect();
        assert_eq!(ids, vec![label, select]);
    }

    #[test]
    fn test_descendants_document_order() {
        let (tree, form, label, input, select) = sample();
        let elements: Vec<NodeId> = tree
            .descendants(tree.root())
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect();
        assert_eq!(elements, vec![form, label, input, select]);
    }

    #[test]
    fn test_descendants_stay_in_subtree() {
        let (tree, _, label, input, _) = sample();
        let elements: Vec<NodeId> = tree
            .descendants(label)
            .filter(|(_, n)| n.is_element())
            .map(|(id, _)| id)
            .collect();
        assert_eq!(elements, vec![input]);
    }

    #[test]
    fn test_ancestors_nearest_first() {
        let (tree, form, label, input, _) = sample();
        let up: Vec<NodeId> = tree.ancestors(input).collect();
        assert_eq!(up, vec![label, form]);
        assert_eq!(tree.parent_element(input), Some(label));
        assert_eq!(tree.parent_element(form), None);
    }

    #[test]
    fn test_text_content() {
        let (tree, form, ..) = sample();
        assert_eq!(tree.text_content(form), "Name");
    }

    #[test]
    fn test_append_attached_child_ignored() {
        let (mut tree, form, label, ..) = sample();
        let before: Vec<NodeId> = tree.children(form).map(|(id, _)| id).collect();
        tree.append_child(form, label);
        let after: Vec<NodeId> = tree.children(form).map(|(id, _)| id).collect();
        assert_eq!(before, after);
    }
}
