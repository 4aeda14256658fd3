//! Paragraph reclassification.
//!
//! The formatter marks option names with bold runs inside otherwise
//! untyped paragraphs, so the paragraph's child shape is the only signal
//! for what it is. Classification is computed once per paragraph and the
//! matching paragraphs are replaced in place by literal Markdown text.

use crate::node::{Element, Node};
use crate::options::RenderOptions;

/// What a paragraph turned out to be, judged purely by its child shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ParagraphKind {
    /// The paragraph's entire content is a single bold run: an option
    /// label, possibly with an inline description after an embedded
    /// newline. Lines of the bold run's text, in order.
    SingleLabel { lines: Vec<String> },

    /// A `-h, --help` style listing: two bold runs joined by a text node
    /// whose trimmed content starts with a comma. Carries the paragraph's
    /// full text with its first character dropped; the formatter leaves an
    /// artifact glyph in front of the short flag, verified against real
    /// output rather than generalized.
    CombinedFlags { text: String },

    /// Anything else. Left untouched so its text falls through to
    /// flattening unmodified.
    Generic,
}

fn is_bold_tag(tag: &str) -> bool {
    matches!(tag, "b" | "strong")
}

fn bold_descendants(el: &Element) -> usize {
    el.children
        .iter()
        .map(|child| match child {
            Node::Element(e) => usize::from(is_bold_tag(&e.tag)) + bold_descendants(e),
            Node::Text(_) => 0,
        })
        .sum()
}

/// Classify a paragraph by its child shape. The two special cases test
/// disjoint child-count patterns, so at most one can match.
pub fn classify(p: &Element) -> ParagraphKind {
    let bold = bold_descendants(p);

    if p.children.len() == 1 && bold == 1 {
        if let Node::Element(only) = &p.children[0] {
            if is_bold_tag(&only.tag) {
                let lines: Vec<String> =
                    only.text_content().lines().map(str::to_owned).collect();
                if !lines.is_empty() {
                    return ParagraphKind::SingleLabel { lines };
                }
            }
        }
    }

    if p.children.len() == 3 && bold == 2 {
        if let Node::Text(middle) = &p.children[1] {
            if middle.trim().starts_with(',') {
                let full = p.text_content();
                let mut chars = full.chars();
                chars.next();
                return ParagraphKind::CombinedFlags {
                    text: chars.as_str().to_string(),
                };
            }
        }
    }

    ParagraphKind::Generic
}

/// Replace every classified paragraph in place by its Markdown rendering;
/// generic paragraphs are left alone.
pub fn reclassify_paragraphs(el: &mut Element, options: &RenderOptions) {
    let old = std::mem::take(&mut el.children);
    for mut child in old {
        if let Node::Element(ref mut e) = child {
            if e.tag == "p" {
                match classify(e) {
                    ParagraphKind::SingleLabel { lines } => {
                        el.children.push(Node::Text(render_single_label(&lines, options)));
                        continue;
                    }
                    ParagraphKind::CombinedFlags { text } => {
                        el.children
                            .push(Node::Text(render_combined_flags(&text, options)));
                        continue;
                    }
                    ParagraphKind::Generic => {}
                }
            }
            reclassify_paragraphs(e, options);
        }
        el.children.push(child);
    }
}

fn render_single_label(lines: &[String], options: &RenderOptions) -> String {
    let Some((label, rest)) = lines.split_first() else {
        return String::new();
    };
    let heading = format!("{}\n{} {}\n", options.hr, options.label_prefix(), label);
    if rest.is_empty() {
        heading
    } else {
        format!(
            "{}\n{delim}{}{delim}\n",
            heading,
            rest.join(" "),
            delim = options.strong_delimiter
        )
    }
}

fn render_combined_flags(text: &str, options: &RenderOptions) -> String {
    format!("{}\n{} {}\n", options.hr, options.label_prefix(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph(children: Vec<Node>) -> Element {
        Element {
            tag: "p".into(),
            attrs: Vec::new(),
            children,
        }
    }

    fn bold(text: &str) -> Node {
        let mut b = Node::element("b");
        b.add_child(Node::text(text));
        b
    }

    fn apply(p: Element) -> Vec<Node> {
        let mut root = Element {
            tag: "body".into(),
            attrs: Vec::new(),
            children: vec![Node::Element(p)],
        };
        reclassify_paragraphs(&mut root, &RenderOptions::default());
        root.children
    }

    #[test]
    fn classify_single_label() {
        let p = paragraph(vec![bold("-v")]);
        assert_eq!(
            classify(&p),
            ParagraphKind::SingleLabel {
                lines: vec!["-v".into()]
            }
        );
    }

    #[test]
    fn classify_single_label_with_description() {
        let p = paragraph(vec![bold("-v\nEnable verbose output")]);
        assert_eq!(
            classify(&p),
            ParagraphKind::SingleLabel {
                lines: vec!["-v".into(), "Enable verbose output".into()]
            }
        );
    }

    #[test]
    fn classify_combined_flags() {
        let p = paragraph(vec![bold("-h"), Node::text(", "), bold("--help")]);
        // The first character of the concatenated text is dropped.
        assert_eq!(
            classify(&p),
            ParagraphKind::CombinedFlags {
                text: "h, --help".into()
            }
        );
    }

    #[test]
    fn combined_flags_drop_is_char_boundary_safe() {
        let p = paragraph(vec![bold("•h"), Node::text(", "), bold("--help")]);
        assert_eq!(
            classify(&p),
            ParagraphKind::CombinedFlags {
                text: "h, --help".into()
            }
        );
    }

    #[test]
    fn three_bold_children_stay_generic() {
        let p = paragraph(vec![bold("-a"), bold("-b"), bold("-c")]);
        assert_eq!(classify(&p), ParagraphKind::Generic);
    }

    #[test]
    fn surrounding_text_stays_generic() {
        let p = paragraph(vec![Node::text("see "), bold("-v"), Node::text(" above")]);
        assert_eq!(classify(&p), ParagraphKind::Generic);
    }

    #[test]
    fn nested_bold_inside_sole_child_stays_generic() {
        let mut outer = Node::element("b");
        outer.add_child(bold("-x"));
        let p = paragraph(vec![outer]);
        assert_eq!(classify(&p), ParagraphKind::Generic);
    }

    #[test]
    fn middle_text_without_comma_stays_generic() {
        let p = paragraph(vec![bold("-h"), Node::text(" or "), bold("--help")]);
        assert_eq!(classify(&p), ParagraphKind::Generic);
    }

    #[test]
    fn single_label_renders_rule_and_heading() {
        let children = apply(paragraph(vec![bold("-v")]));
        assert_eq!(children, vec![Node::text("---\n### -v\n")]);
    }

    #[test]
    fn multi_line_label_renders_strong_description() {
        let children = apply(paragraph(vec![bold("-v\nEnable verbose output")]));
        assert_eq!(
            children,
            vec![Node::text("---\n### -v\n\n**Enable verbose output**\n")]
        );
    }

    #[test]
    fn combined_flags_render_as_heading() {
        let children = apply(paragraph(vec![
            bold("-h"),
            Node::text(", "),
            bold("--help"),
        ]));
        assert_eq!(children, vec![Node::text("---\n### h, --help\n")]);
    }

    #[test]
    fn generic_paragraph_is_untouched() {
        let p = paragraph(vec![bold("-a"), bold("-b"), bold("-c")]);
        let children = apply(p.clone());
        assert_eq!(children, vec![Node::Element(p)]);
    }
}
