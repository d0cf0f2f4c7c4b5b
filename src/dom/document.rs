//! Owned document arena with a mutation journal.
//!
//! Every node appended to the tree is recorded in insertion order; the
//! journal is drained one batch at a time, and one batch corresponds to
//! one delivery to the mutation watcher. This keeps the order-sensitive
//! hero-image selection observable and testable.

use super::node::{Element, Node, NodeData, NodeId};

/// One drained set of insertions, in insertion order.
#[derive(Debug, Default)]
pub struct MutationBatch {
    pub added: Vec<NodeId>,
}

impl MutationBatch {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty()
    }

    pub fn len(&self) -> usize {
        self.added.len()
    }
}

/// Element arena with an `html > head/body` scaffold.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
    head: NodeId,
    body: NodeId,
    journal: Vec<NodeId>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document with the scaffold in place. Scaffold nodes predate
    /// any observer and are not journaled.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            head: NodeId(0),
            body: NodeId(0),
            journal: Vec::new(),
        };

        let root = doc.push(NodeData::Element(Element::new("html")), None);
        let head = doc.push(NodeData::Element(Element::new("head")), Some(root));
        let body = doc.push(NodeData::Element(Element::new("body")), Some(root));
        if let Some(el) = doc.nodes[root.index()].element_mut() {
            el.children = vec![head, body];
        }

        doc.root = root;
        doc.head = head;
        doc.body = body;
        doc
    }

    fn push(&mut self, data: NodeData, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node { data, parent });
        id
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn head(&self) -> NodeId {
        self.head
    }

    #[inline]
    pub fn body(&self) -> NodeId {
        self.body
    }

    // ------------------------------------------------------------------------
    // construction
    // ------------------------------------------------------------------------

    /// Create a detached element. It enters the journal when appended.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(Element::new(tag)), None)
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()), None)
    }

    /// Append a detached node under `parent` and record the insertion.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(
            self.nodes[child.index()].parent.is_none(),
            "append of already-attached node {child}"
        );
        self.nodes[child.index()].parent = Some(parent);
        if let Some(el) = self.nodes[parent.index()].element_mut() {
            el.children.push(child);
        }
        self.journal.push(child);
    }

    // ------------------------------------------------------------------------
    // mutation journal
    // ------------------------------------------------------------------------

    /// Drain all pending insertions as one batch.
    pub fn take_batch(&mut self) -> MutationBatch {
        MutationBatch {
            added: std::mem::take(&mut self.journal),
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.journal.is_empty()
    }

    // ------------------------------------------------------------------------
    // access
    // ------------------------------------------------------------------------

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.nodes[id.index()].element()
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut Element> {
        self.nodes[id.index()].element_mut()
    }

    /// Child ids of an element (empty for text nodes).
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.element(id).map(|el| el.children.as_slice()).unwrap_or(&[])
    }

    /// Element children with a given tag, in document order.
    pub fn children_by_tag<'a>(
        &'a self,
        id: NodeId,
        tag: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.children(id)
            .iter()
            .copied()
            .filter(move |child| self.element(*child).is_some_and(|el| el.is(tag)))
    }

    /// Preorder traversal from `start` (inclusive), in document order.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![start],
        }
    }

    /// First element with a given tag under `start`, in document order.
    pub fn find_by_tag(&self, start: NodeId, tag: &str) -> Option<NodeId> {
        self.descendants(start)
            .find(|id| self.element(*id).is_some_and(|el| el.is(tag)))
    }

    /// Concatenated text of all text descendants.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for node in self.descendants(id) {
            if let Some(text) = self.get(node).text() {
                out.push_str(text);
            }
        }
        out
    }
}

/// Preorder document-order iterator over an arena subtree.
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = self.doc.children(id);
        self.stack.extend(children.iter().rev());
        Some(id)
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_not_journaled() {
        let mut doc = Document::new();
        assert!(!doc.has_pending());
        assert!(doc.take_batch().is_empty());
    }

    #[test]
    fn test_append_records_insertion_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let div = doc.create_element("div");
        doc.append(body, div);
        let img = doc.create_element("img");
        doc.append(div, img);
        let text = doc.create_text("hi");
        doc.append(div, text);

        let batch = doc.take_batch();
        assert_eq!(batch.added, vec![div, img, text]);
        // Journal drained
        assert!(doc.take_batch().is_empty());
    }

    #[test]
    fn test_descendants_document_order() {
        let mut doc = Document::new();
        let body = doc.body();
        let a = doc.create_element("div");
        doc.append(body, a);
        let b = doc.create_element("p");
        doc.append(a, b);
        let c = doc.create_element("span");
        doc.append(a, c);
        let d = doc.create_element("p");
        doc.append(body, d);

        let order: Vec<_> = doc.descendants(body).collect();
        assert_eq!(order, vec![body, a, b, c, d]);
    }

    #[test]
    fn test_text_content_concatenates() {
        let mut doc = Document::new();
        let body = doc.body();
        let p = doc.create_element("p");
        doc.append(body, p);
        let t1 = doc.create_text("Products: ");
        doc.append(p, t1);
        let em = doc.create_element("em");
        doc.append(p, em);
        let t2 = doc.create_text("Analytics");
        doc.append(em, t2);

        assert_eq!(doc.text_content(p), "Products: Analytics");
    }

    #[test]
    fn test_find_by_tag() {
        let mut doc = Document::new();
        let body = doc.body();
        let main = doc.create_element("main");
        doc.append(body, main);
        assert_eq!(doc.find_by_tag(doc.root(), "main"), Some(main));
        assert_eq!(doc.find_by_tag(doc.root(), "video"), None);
    }
}
