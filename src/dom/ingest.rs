//! HTML ingest via `tl`.
//!
//! Parsed nodes are appended one by one, so every created element and
//! text node flows through the mutation journal in document order, the
//! same order a streaming renderer would insert them.

use super::document::Document;
use super::node::NodeId;
use super::render::RAW_TEXT_ELEMENTS;

impl Document {
    /// Parse an HTML fragment and append its nodes under `parent`.
    ///
    /// Parse failure degrades to keeping the input as a raw text node;
    /// ingest never fails.
    pub fn ingest_fragment(&mut self, parent: NodeId, html: &str) {
        let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
            let text = self.create_text(html);
            self.append(parent, text);
            return;
        };

        let parser = dom.parser();
        for handle in dom.children() {
            self.convert_node(parent, *handle, parser);
        }
    }

    /// Parse a complete page, routing `head`/`body` content into the
    /// scaffold. Content outside an explicit `head`/`body` lands in the
    /// body.
    pub fn ingest_page(&mut self, html: &str) {
        let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
            let body = self.body();
            let text = self.create_text(html);
            self.append(body, text);
            return;
        };

        let parser = dom.parser();
        for handle in dom.children() {
            self.route_top(*handle, parser);
        }
    }

    /// Route a top-level parsed node into the scaffold.
    fn route_top(&mut self, handle: tl::NodeHandle, parser: &tl::Parser) {
        let Some(node) = handle.get(parser) else {
            return;
        };

        match node {
            tl::Node::Tag(tag) => {
                let name = tag.name().as_utf8_str().to_lowercase();
                match name.as_str() {
                    "html" => {
                        for child in tag.children().top().iter() {
                            self.route_top(*child, parser);
                        }
                    }
                    "head" | "body" => {
                        let target = if name == "head" {
                            self.head()
                        } else {
                            self.body()
                        };
                        for (key, value) in tag.attributes().iter() {
                            let key_str = key.as_ref().to_lowercase();
                            let value_str = value.map(|v| v.to_string()).unwrap_or_default();
                            if let Some(el) = self.element_mut(target) {
                                el.set_attr(&key_str, &decode_entities(&value_str));
                            }
                        }
                        for child in tag.children().top().iter() {
                            self.convert_node(target, *child, parser);
                        }
                    }
                    _ => {
                        let body = self.body();
                        self.convert_node(body, handle, parser);
                    }
                }
            }
            tl::Node::Raw(bytes) => {
                let text = bytes.as_utf8_str();
                // Skip doctype declarations and inter-tag whitespace
                if text.trim().is_empty() || text.trim_start().starts_with("<!") {
                    return;
                }
                let body = self.body();
                let id = self.create_text(&text);
                self.append(body, id);
            }
            tl::Node::Comment(_) => {}
        }
    }

    /// Convert a parsed node and its subtree into arena nodes under
    /// `parent`, journaling each insertion.
    fn convert_node(&mut self, parent: NodeId, handle: tl::NodeHandle, parser: &tl::Parser) {
        let Some(node) = handle.get(parser) else {
            return;
        };

        match node {
            tl::Node::Tag(tag) => {
                let tag_name = tag.name().as_utf8_str().to_lowercase();
                let id = self.create_element(&tag_name);

                for (key, value) in tag.attributes().iter() {
                    let key_str = key.as_ref().to_lowercase();
                    let value_str = value.map(|v| v.to_string()).unwrap_or_default();
                    if let Some(el) = self.element_mut(id) {
                        el.set_attr(&key_str, &decode_entities(&value_str));
                    }
                }

                self.append(parent, id);

                for child in tag.children().top().iter() {
                    self.convert_node(id, *child, parser);
                }
            }
            tl::Node::Raw(bytes) => {
                let text = bytes.as_utf8_str();
                // Skip whitespace-only text
                if text.trim().is_empty() {
                    return;
                }
                // Raw-text elements keep their content verbatim
                let raw_parent = self
                    .element(parent)
                    .is_some_and(|el| RAW_TEXT_ELEMENTS.contains(&el.tag.as_str()));
                let content = if raw_parent {
                    text.to_string()
                } else {
                    decode_entities(&text)
                };
                let id = self.create_text(&content);
                self.append(parent, id);
            }
            tl::Node::Comment(_) => {}
        }
    }
}

// ============================================================================
// character references
// ============================================================================

/// Decode the common named and numeric character references.
///
/// Unknown references pass through untouched; the serializer re-escapes
/// markup-significant characters on output.
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match take_reference(rest) {
            Some((decoded, consumed)) => {
                out.push(decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse one `&...;` reference at the start of `s`. Returns the decoded
/// character and the consumed byte length.
fn take_reference(s: &str) -> Option<(char, usize)> {
    // Byte scan: the 32-byte cap may fall inside a multi-byte character,
    // so the window cannot be taken as a str slice.
    let window = &s.as_bytes()[..s.len().min(32)];
    let end = window.iter().position(|&b| b == b';')?;
    let name = &s[1..end];
    let decoded = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some((decoded, end + 1))
}

// ============================================================================
// tests
// ============================================================================
