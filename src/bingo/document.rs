//! # Document Assembly
//!
//! Wraps a batch of sheets and the active styles into one standalone HTML
//! document for printing or export. Everything is copied in, so the document
//! owns its whole tree and nothing the caller does afterwards can change it.

use crate::markup::{Element, Node};
use crate::replicate::Sheet;
use crate::styles::StyleSheet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn head(&self) -> Option<&Element> {
        self.root.child_elements().find(|e| e.tag() == "head")
    }

    pub fn body(&self) -> Option<&Element> {
        self.root.child_elements().find(|e| e.tag() == "body")
    }

    pub fn to_html(&self) -> String {
        format!("<!DOCTYPE html>\n{}\n", self.root.to_html())
    }
}

pub fn assemble(sheets: &[Sheet], styles: &StyleSheet, capture_styles: bool) -> Document {
    let mut head = Element::new("head").with_child(Element::new("meta").with_attr("charset", "utf-8"));
    if capture_styles {
        for block in styles.blocks() {
            head = head.with_child(
                Element::new("style")
                    .with_attr("data-name", block.name.as_str())
                    .with_raw(block.css.as_str()),
            );
        }
    }

    let mut body = Element::new("body");
    for sheet in sheets {
        body.push(Node::Element(sheet.root.clone()));
    }
    body.set_attr("style", "overflow: visible");

    let root = Element::new("html").with_child(head).with_child(body);
    Document { root }
}
