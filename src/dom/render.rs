//! HTML serialization of the arena.

use super::document::Document;
use super::node::{NodeData, NodeId};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is emitted verbatim.
pub(crate) const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Document {
    /// Serialize the whole document, doctype included.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!doctype html>");
        self.render_node(self.root(), &mut out);
        out
    }

    /// Serialize one subtree into `out`.
    pub fn render_node(&self, id: NodeId, out: &mut String) {
        match &self.get(id).data {
            NodeData::Text(text) => escape_text(text, out),
            NodeData::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                for (key, value) in el.attrs() {
                    out.push(' ');
                    out.push_str(key);
                    if !value.is_empty() {
                        out.push_str("=\"");
                        escape_attr(value, out);
                        out.push('"');
                    }
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                    return;
                }

                if RAW_TEXT_ELEMENTS.contains(&el.tag.as_str()) {
                    for child in &el.children {
                        if let Some(text) = self.get(*child).text() {
                            out.push_str(text);
                        }
                    }
                } else {
                    for child in &el.children {
                        self.render_node(*child, out);
                    }
                }

                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
