//! Interactive viewer loop.
//!
//! A readline prompt takes a manual-page name, runs one fetch-then-render
//! pipeline per submission, and prints the resulting Markdown. Submissions
//! are strictly sequential: a new page cannot be requested while the
//! previous pipeline is still running, so a stale result can never race a
//! newer one onto the display, and the fetch timeout bounds each pipeline.

use anyhow::Result;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};

use mandown::Renderer;

use crate::fetch::{self, FetchError};
use crate::pages::PageIndex;

/// Cap on completion candidates shown at once.
const MAX_CANDIDATES: usize = 20;

// ─── Completer ───────────────────────────────────────────────────────────────

struct PageHelper {
    index: PageIndex,
}

impl Completer for PageHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        // The whole line is one page name; nothing to complete mid-word.
        let prefix = &line[..pos];
        if prefix.is_empty() || prefix.contains(' ') {
            return Ok((pos, vec![]));
        }

        let matches: Vec<Pair> = self
            .index
            .with_prefix(prefix)
            .take(MAX_CANDIDATES)
            .map(|name| Pair {
                display: name.to_string(),
                replacement: name.to_string(),
            })
            .collect();

        Ok((0, matches))
    }
}

impl Hinter for PageHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        self.index
            .first_with_prefix(line)
            .and_then(|name| name.strip_prefix(line))
            .map(str::to_owned)
    }
}

impl Highlighter for PageHelper {}
impl Validator for PageHelper {}
impl Helper for PageHelper {}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Fetch and render one page. Every failure comes back as visible
/// Markdown, never as an empty screen.
fn view_page(renderer: &Renderer, page: &str) -> String {
    match fetch::fetch_html(page) {
        Ok(html) => {
            let markdown = renderer.render(&html);
            if markdown.trim().is_empty() {
                not_found_page(page)
            } else {
                markdown
            }
        }
        Err(FetchError::NotFound { .. } | FetchError::EmptyOutput { .. }) => not_found_page(page),
        Err(e) => {
            tracing::warn!(page = %page, error = %e, "fetch failed");
            error_page(page, &e)
        }
    }
}

fn not_found_page(page: &str) -> String {
    format!("# No manual entry\n\nNothing installed matches `{page}`.")
}

fn error_page(page: &str, err: &FetchError) -> String {
    format!("# Formatter error\n\nCould not render `{page}`: {err}")
}

// ─── Viewer loop ─────────────────────────────────────────────────────────────

pub fn run() -> Result<()> {
    let index = PageIndex::load();
    let renderer = Renderer::new();

    let config = rustyline::Config::builder()
        .max_history_size(1000)
        .expect("valid history size")
        .build();
    let mut editor = Editor::with_config(config)?;
    editor.set_helper(Some(PageHelper { index }));

    println!("mandown - type a manual page name, 'quit' to leave.");

    loop {
        match editor.readline("man> ") {
            Ok(line) => {
                let page = line.trim();
                if page.is_empty() {
                    continue;
                }
                if matches!(page.to_ascii_lowercase().as_str(), "exit" | "quit") {
                    break;
                }

                let _ = editor.add_history_entry(page);
                println!("{}", view_page(&renderer, page));
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C, just show a new prompt
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D exits
                break;
            }
            Err(e) => {
                tracing::warn!(error = %e, "readline error");
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    Ok(())
}
