//! Index of installed manual pages, used for prefix suggestions.
//!
//! Built once at startup from a single `man -k .` invocation and held as
//! an explicit immutable value that gets passed to whoever needs prefix
//! search. A missing or failing `man -k` degrades to an empty index: the
//! viewer still works, just without suggestions.

use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading page name of an apropos line, e.g. `ls (1) - list directory
/// contents`. Grouped listings (`intro, Intro (1)`) yield their first
/// name; lines without a section parenthesis are skipped.
static PAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\s,]+),?(?:\s+\S+)*\s+\(").expect("valid page-name regex"));

/// Sorted, deduplicated list of installed page names.
pub struct PageIndex {
    names: Vec<String>,
}

impl PageIndex {
    /// Query the system for installed pages.
    pub fn load() -> Self {
        let _span = tracing::info_span!("load_page_index").entered();

        match Command::new("man").args(["-k", "."]).output() {
            Ok(output) if output.status.success() => {
                let index = Self::parse(&String::from_utf8_lossy(&output.stdout));
                tracing::info!(pages = index.len(), "page index loaded");
                index
            }
            Ok(output) => {
                tracing::warn!(status = %output.status, "man -k failed; suggestions disabled");
                Self::empty()
            }
            Err(e) => {
                tracing::warn!(error = %e, "man -k unavailable; suggestions disabled");
                Self::empty()
            }
        }
    }

    pub fn empty() -> Self {
        Self { names: Vec::new() }
    }

    fn parse(listing: &str) -> Self {
        let mut names: Vec<String> = listing
            .lines()
            .filter_map(|line| PAGE_NAME.captures(line))
            .map(|caps| caps[1].to_string())
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// First installed page name starting with `prefix`, if any.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&str> {
        if prefix.is_empty() {
            return None;
        }
        let start = self.names.partition_point(|name| name.as_str() < prefix);
        self.names
            .get(start)
            .map(String::as_str)
            .filter(|name| name.starts_with(prefix))
    }

    /// All installed page names starting with `prefix`, in order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        let start = self.names.partition_point(|name| name.as_str() < prefix);
        self.names[start..]
            .iter()
            .map(String::as_str)
            .take_while(move |name| name.starts_with(prefix))
    }
}
