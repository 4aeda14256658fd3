//! Tree rewrite passes for manual-page HTML.
//!
//! Each pass walks the tree once and rewrites child vectors in place.
//! Passes are registered by name in an ordered map and applied front to
//! back; order matters (anchors must be unwrapped before headings are
//! promoted, headings before paragraphs are reclassified).

mod blocks;
mod paragraph;

pub use blocks::{promote_headings, strip_boilerplate, unwrap_anchors};
pub use paragraph::{classify, reclassify_paragraphs, ParagraphKind};

use indexmap::IndexMap;

use crate::node::Element;
use crate::options::RenderOptions;

/// A single rewrite pass over the tree.
pub type Pass = fn(&mut Element, &RenderOptions);

/// Ordered collection of named rewrite passes.
pub struct Passes {
    passes: IndexMap<&'static str, Pass>,
}

impl Passes {
    /// The standard pass pipeline for manual-page HTML.
    pub fn manpage() -> Self {
        let mut passes: IndexMap<&'static str, Pass> = IndexMap::new();
        passes.insert("strip-boilerplate", strip_boilerplate);
        passes.insert("unwrap-anchors", unwrap_anchors);
        passes.insert("promote-headings", promote_headings);
        passes.insert("reclassify-paragraphs", reclassify_paragraphs);
        Self { passes }
    }

    /// An empty pipeline, for callers assembling their own.
    pub fn empty() -> Self {
        Self {
            passes: IndexMap::new(),
        }
    }

    /// Register a pass at the end of the pipeline, replacing any existing
    /// pass with the same name in place.
    pub fn insert(&mut self, name: &'static str, pass: Pass) -> &mut Self {
        self.passes.insert(name, pass);
        self
    }

    /// Remove a pass by name.
    pub fn remove(&mut self, name: &str) -> Option<Pass> {
        self.passes.shift_remove(name)
    }

    /// Apply every pass to the tree rooted at `root`, in order.
    pub fn apply(&self, root: &mut Element, options: &RenderOptions) {
        for pass in self.passes.values() {
            pass(root, options);
        }
    }
}

impl Default for Passes {
    fn default() -> Self {
        Self::manpage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn manpage_pipeline_order() {
        let passes = Passes::manpage();
        let names: Vec<_> = passes.passes.keys().copied().collect();
        assert_eq!(
            names,
            vec![
                "strip-boilerplate",
                "unwrap-anchors",
                "promote-headings",
                "reclassify-paragraphs",
            ]
        );
    }

    #[test]
    fn remove_disables_a_pass() {
        let mut passes = Passes::manpage();
        assert!(passes.remove("promote-headings").is_some());

        let mut root = Element {
            tag: "body".into(),
            attrs: Vec::new(),
            children: vec![{
                let mut h1 = Node::element("h1");
                h1.add_child(Node::text("NAME"));
                h1
            }],
        };
        passes.apply(&mut root, &RenderOptions::default());

        // The heading element survives untouched.
        assert!(root.children[0].is_element());
    }
}
