//! Block-level rewrites: boilerplate stripping, anchor unwrapping, and
//! heading promotion.

use crate::node::{Element, Node};
use crate::options::RenderOptions;

/// Subtrees that must not leak text into the flattened output. The
/// formatter emits a full HTML document, so `<head>` carries a title and
/// an inline stylesheet.
const STRIPPED_TAGS: &[&str] = &["head", "script", "style"];

/// Remove `head`, `script`, and `style` subtrees wholesale.
pub fn strip_boilerplate(el: &mut Element, options: &RenderOptions) {
    el.children.retain(|child| match child {
        Node::Element(e) => !STRIPPED_TAGS.contains(&e.tag.as_str()),
        Node::Text(_) => true,
    });
    for child in &mut el.children {
        if let Node::Element(e) = child {
            strip_boilerplate(e, options);
        }
    }
}

/// Replace every anchor by its children, spliced at the anchor's former
/// position. Link targets are discarded; only the text matters. Empty
/// anchors vanish. Running the pass twice is a no-op: no anchors remain
/// after the first application.
pub fn unwrap_anchors(el: &mut Element, options: &RenderOptions) {
    let old = std::mem::take(&mut el.children);
    for mut child in old {
        if let Node::Element(ref mut e) = child {
            unwrap_anchors(e, options);
            if e.tag == "a" {
                el.children.append(&mut e.children);
                continue;
            }
        }
        el.children.push(child);
    }
}

/// Replace every `h1` in place by a text node `"# <text>\n"` and every
/// `h2` by `"## <text>\n"`, preserving reading order. Runs tree-wide
/// before paragraph classification.
pub fn promote_headings(el: &mut Element, options: &RenderOptions) {
    let old = std::mem::take(&mut el.children);
    for mut child in old {
        if let Node::Element(ref mut e) = child {
            match e.tag.as_str() {
                "h1" => {
                    el.children
                        .push(Node::Text(format!("# {}\n", e.text_content().trim())));
                    continue;
                }
                "h2" => {
                    el.children
                        .push(Node::Text(format!("## {}\n", e.text_content().trim())));
                    continue;
                }
                _ => promote_headings(e, options),
            }
        }
        el.children.push(child);
    }
}
