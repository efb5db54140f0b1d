// File: crates/survival-core/src/svg.rs
// Summary: Minimal SVG element tree and serializer.

use std::fmt::Write;

/// Child of an element: nested element or escaped text.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG tag with attributes kept in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), children: Vec::new() }
    }

    /// Root `<svg>` of `width`×`height` pixels.
    pub fn svg(width: u32, height: u32) -> Self {
        Self::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", width)
            .attr("height", height)
            .attr("viewBox", format!("0 0 {width} {height}"))
    }

    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attrs.push((key, value.to_string()));
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    /// Serialize this element and its subtree.
    pub fn render(&self) -> String {
        let mut buf = String::new();
        self.render_into(&mut buf);
        buf
    }

    fn render_into(&self, buf: &mut String) {
        buf.push('<');
        buf.push_str(self.name);
        for (k, v) in &self.attrs {
            let _ = write!(buf, " {k}=\"{}\"", escape(v));
        }
        if self.children.is_empty() {
            buf.push_str("/>");
            return;
        }
        buf.push('>');
        for c in &self.children {
            match c {
                Node::Element(e) => e.render_into(buf),
                Node::Text(t) => buf.push_str(&escape(t)),
            }
        }
        let _ = write!(buf, "</{}>", self.name);
    }
}

/// Escape XML special characters for text and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
