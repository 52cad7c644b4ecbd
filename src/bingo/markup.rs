//! # Markup Tree
//!
//! A small owned element tree used for templates, sheets and documents.
//!
//! Every node is owned by its parent, so `Clone` is a full deep copy: a cloned
//! tree shares nothing with its source. That is what lets the replicator
//! mutate clones freely and the assembler hand out documents with no links
//! back into the rendering context.
//!
//! Serialization produces HTML. Text nodes are escaped; raw nodes are written
//! verbatim (used for the free-cell marker, which is itself markup).

use std::fmt::Write;

const VOID_TAGS: &[&str] = &["br", "hr", "img", "meta", "link"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn with_raw(mut self, html: impl Into<String>) -> Self {
        self.children.push(Node::Raw(html.into()));
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing any existing value in place.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// The first child node, if it is an element.
    pub fn first_element_child_mut(&mut self) -> Option<&mut Element> {
        match self.children.first_mut() {
            Some(Node::Element(e)) => Some(e),
            _ => None,
        }
    }

    pub fn first_element_child(&self) -> Option<&Element> {
        match self.children.first() {
            Some(Node::Element(e)) => Some(e),
            _ => None,
        }
    }

    /// Replaces all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of all descendant text and raw nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Finds elements with `tag` in document order, starting with `self`.
    ///
    /// Matching elements are not searched further, so nested matches are
    /// reported through their outermost ancestor only.
    pub fn find_all(&self, tag: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect(tag, &mut found);
        found
    }

    fn collect<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        if self.tag == tag {
            found.push(self);
            return;
        }
        for child in &self.children {
            if let Node::Element(e) = child {
                e.collect(tag, found);
            }
        }
    }

    /// Mutable counterpart of [`Element::find_all`].
    pub fn find_all_mut(&mut self, tag: &str) -> Vec<&mut Element> {
        let mut found = Vec::new();
        self.collect_mut(tag, &mut found);
        found
    }

    fn collect_mut<'a>(&'a mut self, tag: &str, found: &mut Vec<&'a mut Element>) {
        if self.tag == tag {
            found.push(self);
            return;
        }
        for child in &mut self.children {
            if let Node::Element(e) = child {
                e.collect_mut(tag, found);
            }
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_attr(value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(e) => e.write_html(out),
                Node::Text(t) => out.push_str(&escape_text(t)),
                Node::Raw(html) => out.push_str(html),
            }
        }

        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
