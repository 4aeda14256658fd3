//! Document tree for manual-page HTML.
//!
//! The tree is a plain owned structure: an element exclusively owns its
//! children for the lifetime of one conversion, and there are no parent
//! links or cycles. Rewrite passes splice and replace nodes by rebuilding
//! child vectors in place.

/// A single node in the document tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element node: lowercase tag name, attribute pairs, owned children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an element node with no attributes.
    pub fn element(tag: &str) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        })
    }

    /// Create an element node with attributes.
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        Node::Element(Element {
            tag: tag.to_lowercase(),
            attrs: attrs
                .into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_string()))
                .collect(),
            children: Vec::new(),
        })
    }

    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Tag name for elements, `None` for text runs.
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(el) => Some(&el.tag),
            Node::Text(_) => None,
        }
    }

    /// Add a child node. Text nodes ignore the call.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(el) = self {
            el.children.push(child);
        }
    }

    /// All text content of this node and its descendants, concatenated.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(el) => el.text_content(),
        }
    }
}

impl Element {
    /// Get an attribute value by (case-insensitive) name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        let name = name.to_lowercase();
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over child nodes.
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Iterate over element children only.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        })
    }

    /// All descendant text, concatenated in document order.
    pub fn text_content(&self) -> String {
        self.children
            .iter()
            .map(Node::text_content)
            .collect::<Vec<_>>()
            .join("")
    }
}
