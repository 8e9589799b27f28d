//! Markup Tree
//!
//! The in-memory representation of rendered markup. Components produce
//! a `VNode` tree during the render pass; the tree is serialized to an
//! HTML string once the pass has completed.
//!
//! Serialization escapes text content and attribute values. Trusted,
//! already-serialized markup is only ever embedded at the document
//! template level, never inside a `VNode`.

use serde::{Deserialize, Serialize};

/// Void elements that must not have closing tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// A single node in a rendered markup tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    /// Tag name; empty for text nodes and fragments
    #[serde(default)]
    pub tag: String,

    /// Attributes in insertion order (stable output for identical input)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<(String, String)>,

    /// Text content for text nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Child nodes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VNode>,
}

impl VNode {
    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        VNode {
            tag: tag.into(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Create a text node
    pub fn text(content: impl Into<String>) -> Self {
        VNode {
            tag: String::new(),
            attrs: Vec::new(),
            text: Some(content.into()),
            children: Vec::new(),
        }
    }

    /// Create a fragment: children rendered with no enclosing element
    pub fn fragment(children: Vec<VNode>) -> Self {
        VNode {
            tag: String::new(),
            attrs: Vec::new(),
            text: None,
            children,
        }
    }

    /// Create an empty node that renders to nothing
    pub fn empty() -> Self {
        Self::fragment(Vec::new())
    }

    /// Add an attribute (builder style)
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Add a child node (builder style)
    pub fn child(mut self, node: VNode) -> Self {
        self.children.push(node);
        self
    }

    /// Returns true if this node produces no output
    pub fn is_empty(&self) -> bool {
        self.tag.is_empty() && self.text.is_none() && self.children.is_empty()
    }
}

/// Render a `VNode` tree to an HTML string.
pub fn render_to_html(node: &VNode) -> String {
    let mut buf = String::with_capacity(1024);
    write_node(node, &mut buf);
    buf
}

fn write_node(node: &VNode, buf: &mut String) {
    // Text node
    if node.tag.is_empty() {
        if let Some(text) = &node.text {
            buf.push_str(&escape_html(text));
        }
        for child in &node.children {
            write_node(child, buf);
        }
        return;
    }

    buf.push('<');
    buf.push_str(&node.tag);
    for (name, value) in &node.attrs {
        buf.push(' ');
        buf.push_str(name);
        buf.push_str("=\"");
        buf.push_str(&escape_attr(value));
        buf.push('"');
    }

    if VOID_ELEMENTS.contains(&node.tag.as_str()) {
        buf.push_str(" />");
        return;
    }
    buf.push('>');

    if let Some(text) = &node.text {
        buf.push_str(&escape_html(text));
    }
    for child in &node.children {
        write_node(child, buf);
    }

    buf.push_str("</");
    buf.push_str(&node.tag);
    buf.push('>');
}

/// Escape text content for HTML element bodies.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted HTML attribute.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
