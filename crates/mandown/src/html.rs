//! HTML parsing adapter.
//!
//! Wraps `scraper` and converts its tree into the crate's own [`Node`]
//! structure so the rewrite passes can mutate freely. Comments, doctype,
//! and processing instructions are dropped at this boundary; only elements
//! and text runs survive.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::Node;

/// Parse an HTML document into a [`Node`] tree.
///
/// Malformed or empty input never fails; the html5ever tree builder
/// recovers into whatever document shape it can, and an empty input yields
/// a tree with no text content.
///
/// # Example
///
/// ```rust
/// use mandown::parse;
///
/// let tree = parse("<h1>NAME</h1><p>ls - list directory contents</p>");
/// assert!(tree.text_content().contains("ls"));
/// ```
pub fn parse(html: &str) -> Node {
    let document = Html::parse_document(html);
    scraper_to_node(document.root_element())
}

fn scraper_to_node(element: ElementRef) -> Node {
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(element.value().name())
    } else {
        Node::element_with_attrs(element.value().name(), attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
