//! Renderer - the main entry point for manual-page HTML to Markdown.

use crate::html;
use crate::node::Node;
use crate::options::RenderOptions;
use crate::rules::Passes;

/// Converts formatter-generated manual-page HTML into Markdown.
///
/// The renderer is pure and synchronous: each call owns its tree for the
/// duration of the conversion and keeps no cross-call state, so independent
/// conversions may run concurrently without coordination.
pub struct Renderer {
    options: RenderOptions,
    passes: Passes,
}

impl Renderer {
    /// Create a renderer with the default options and pass pipeline.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            passes: Passes::manpage(),
        }
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self {
            options,
            passes: Passes::manpage(),
        }
    }

    /// Get the current options.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Get mutable access to options.
    pub fn options_mut(&mut self) -> &mut RenderOptions {
        &mut self.options
    }

    /// Get mutable access to the pass pipeline.
    pub fn passes_mut(&mut self) -> &mut Passes {
        &mut self.passes
    }

    /// Convert an HTML document string to Markdown.
    ///
    /// Empty or malformed input degrades to an empty (or minimal) result;
    /// the conversion itself never fails.
    pub fn render(&self, html: &str) -> String {
        self.render_tree(html::parse(html))
    }

    /// Convert an already-parsed tree to Markdown, consuming it.
    pub fn render_tree(&self, mut tree: Node) -> String {
        if let Node::Element(root) = &mut tree {
            self.passes.apply(root, &self.options);
        }

        let mut parts = Vec::new();
        collect_text(&tree, &mut parts);
        parts.join("\n").trim().to_string()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Document-order traversal collecting every remaining text run. All
/// Markdown was already spliced in as literal text by the rewrite passes;
/// nothing here is tag-aware.
fn collect_text(node: &Node, out: &mut Vec<String>) {
    match node {
        Node::Text(text) => out.push(text.clone()),
        Node::Element(el) => {
            for child in &el.children {
                collect_text(child, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn heading_round_trip() {
        let renderer = Renderer::new();
        let result = renderer.render("<h1>NAME</h1><h2>DESCRIPTION</h2>");
        assert!(result.contains("# NAME"));
        assert!(result.contains("## DESCRIPTION"));
    }

    #[test]
    fn single_line_label() {
        let renderer = Renderer::new();
        let result = renderer.render("<p><b>-v</b></p>");
        assert!(result.contains("---\n### -v"));
    }

    #[test]
    fn multi_line_label() {
        let renderer = Renderer::new();
        let result = renderer.render("<p><b>-v\nEnable verbose output</b></p>");
        assert!(result.contains("---\n### -v\n\n**Enable verbose output**"));
    }

    #[test]
    fn combined_flags() {
        let renderer = Renderer::new();
        let result = renderer.render("<p><b>-h</b>, <b>--help</b></p>");
        // Full paragraph text minus its first character.
        assert!(result.contains("---\n### h, --help"));
    }

    #[test]
    fn unmatched_paragraph_falls_through() {
        let renderer = Renderer::new();
        let result = renderer.render("<p><b>-a</b><b>-b</b><b>-c</b></p>");
        assert!(result.contains("-a"));
        assert!(result.contains("-b"));
        assert!(result.contains("-c"));
        assert!(!result.contains("###"));
    }

    #[test]
    fn anchor_text_survives_without_link() {
        let renderer = Renderer::new();
        let result = renderer.render(r##"<p>see <a href="#o">OPTIONS</a></p>"##);
        assert!(result.contains("OPTIONS"));
        assert!(!result.contains("#o"));
    }

    #[test]
    fn flatten_trims_outer_whitespace() {
        let renderer = Renderer::new();
        let mut root = Node::element("body");
        root.add_child(Node::text("\n\n"));
        root.add_child(Node::text("first"));
        root.add_child(Node::text("\n\nsecond"));
        root.add_child(Node::text("\n"));
        let result = renderer.render_tree(root);
        assert_eq!(result, "first\n\n\nsecond");
    }

    #[test]
    fn empty_input_is_empty_output() {
        let renderer = Renderer::new();
        assert_eq!(renderer.render(""), "");
    }

    #[test]
    fn head_styles_do_not_leak() {
        let renderer = Renderer::new();
        let result = renderer.render(
            "<html><head><title>LS(1)</title><style>body{margin:0}</style></head>\
             <body><h1>NAME</h1></body></html>",
        );
        assert_eq!(result, "# NAME");
    }

    #[test]
    fn pipeline_can_be_customized() {
        let mut renderer = Renderer::new();
        *renderer.passes_mut() = Passes::empty();
        renderer
            .passes_mut()
            .insert("promote-headings", crate::rules::promote_headings);
        let result = renderer.render("<h1>NAME</h1>");
        assert_eq!(result, "# NAME");
    }

    #[test]
    fn custom_options_change_markers() {
        let renderer = Renderer::with_options(crate::RenderOptions {
            hr: "***".to_string(),
            label_level: 4,
            strong_delimiter: "__".to_string(),
        });
        let result = renderer.render("<p><b>-v\ndetails</b></p>");
        assert!(result.contains("***\n#### -v\n\n__details__"));
    }
}
