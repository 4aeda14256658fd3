//! # mandown
//!
//! Rewrite the HTML that the system manual-page formatter produces into
//! readable Markdown.
//!
//! This is not a general HTML to Markdown converter. The rewrite rules are
//! tuned to the output shape of `man -Thtml`: top-level section headings,
//! bolded option labels, and loosely structured paragraphs whose child
//! shape is the only signal for what they are. Markup outside that shape
//! falls through to plain text rather than failing the conversion.
//!
//! ## Design
//!
//! Conversion happens in the tree, not in the output string: each rewrite
//! pass replaces matched elements in place with text nodes that already
//! contain literal Markdown, so the final step is nothing more than
//! flattening the remaining text runs in document order.
//!
//! ## Example
//!
//! ```rust
//! use mandown::Renderer;
//!
//! let renderer = Renderer::new();
//! let markdown = renderer.render("<h1>NAME</h1><p><b>-v</b></p>");
//! assert!(markdown.contains("# NAME"));
//! assert!(markdown.contains("### -v"));
//! ```

pub mod html;
pub mod node;
mod options;
mod render;
pub mod rules;

pub use html::parse;
pub use node::{Element, Node};
pub use options::RenderOptions;
pub use render::Renderer;
pub use rules::{classify, ParagraphKind, Pass, Passes};
