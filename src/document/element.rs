//! Element tree with child/descendant queries and XML rendering.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single node in a parsed XMCDA document: a name, optional attributes,
/// optional text content, and nested children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Creates an empty element with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Adds an attribute, builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Sets the text content, builder style.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element, builder style.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child element in place.
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of an attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the text content, if present.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Returns all direct children.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Returns the first direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Returns all direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Returns the first element reachable along a `/`-separated child path.
    pub fn find(&self, path: &str) -> Option<&Element> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Returns all elements reachable along a `/`-separated child path,
    /// in document order.
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        let mut current = vec![self];
        for segment in path.split('/') {
            current = current
                .into_iter()
                .flat_map(|e| e.children.iter().filter(|c| c.name == segment))
                .collect();
        }
        current
    }

    /// Returns the text content of the element at a child path, if any.
    pub fn find_text(&self, path: &str) -> Option<&str> {
        self.find(path).and_then(Element::text)
    }

    /// Returns every descendant with the given name, in document order.
    /// The element itself is not included.
    pub fn descendants<'a>(&'a self, name: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        self.collect_descendants(name, &mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, name: &str, out: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                out.push(child);
            }
            child.collect_descendants(name, out);
        }
    }

    /// Renders the element as indented XML with escaped text and attributes.
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, 0);
        out
    }

    fn render(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        match (&self.text, self.children.is_empty()) {
            (None, true) => {
                out.push_str("/>\n");
            }
            (Some(text), true) => {
                let _ = writeln!(out, ">{}</{}>", escape(text), self.name);
            }
            _ => {
                out.push_str(">\n");
                if let Some(text) = &self.text {
                    for _ in 0..=depth {
                        out.push_str("  ");
                    }
                    out.push_str(&escape(text));
                    out.push('\n');
                }
                for child in &self.children {
                    child.render(out, depth + 1);
                }
                for _ in 0..depth {
                    out.push_str("  ");
                }
                let _ = writeln!(out, "</{}>", self.name);
            }
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
