//! Configuration options for the Markdown rewrite.

/// Options controlling the Markdown the rewrite passes emit.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Horizontal rule emitted above each option label.
    pub hr: String,

    /// Heading level (1-6) used for option labels.
    pub label_level: usize,

    /// Strong delimiter for inline option descriptions.
    pub strong_delimiter: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            hr: "---".to_string(),
            label_level: 3,
            strong_delimiter: "**".to_string(),
        }
    }
}

impl RenderOptions {
    /// ATX prefix for option-label headings, e.g. `###` at level 3.
    pub(crate) fn label_prefix(&self) -> String {
        "#".repeat(self.label_level.clamp(1, 6))
    }
}
