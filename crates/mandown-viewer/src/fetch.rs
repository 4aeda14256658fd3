//! Manual-page formatter subprocess.
//!
//! Runs `man -Thtml <page>` and captures the HTML document it writes to
//! stdout. The page name is always passed as a single argv element behind
//! a `--` terminator, never interpolated into a shell string, so names
//! containing shell metacharacters or leading dashes cannot change what is
//! executed.

use std::io::Read;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use thiserror::Error;

/// Hard ceiling on one formatter invocation. The formatter normally
/// finishes in well under a second; a hang must surface as an error
/// instead of blocking the viewer indefinitely.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// man-db exits with 16 when no page matched.
const EXIT_NOT_FOUND: i32 = 16;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no manual entry for `{page}`")]
    NotFound { page: String },

    #[error("manual formatter exited with {status}: {stderr}")]
    Formatter { status: ExitStatus, stderr: String },

    #[error("manual formatter produced no output for `{page}`")]
    EmptyOutput { page: String },

    #[error("manual formatter timed out after {secs}s")]
    TimedOut { secs: u64 },

    #[error("failed to launch manual formatter: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Fetch the HTML rendering of `page` from the system formatter.
pub fn fetch_html(page: &str) -> Result<String, FetchError> {
    let _span = tracing::info_span!("fetch_html", page = %page).entered();

    let mut command = Command::new("man");
    command.args(["-Thtml", "--"]).arg(page);
    run_formatter(command, page, FETCH_TIMEOUT)
}

/// Spawn the formatter, enforce the timeout, and classify its exit.
fn run_formatter(
    mut command: Command,
    page: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Drain both pipes off-thread so a page larger than the pipe buffer
    // cannot deadlock against the wait loop below.
    let stdout = drain(child.stdout.take());
    let stderr = drain(child.stderr.take());

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait()? {
            Some(status) => break status,
            None if Instant::now() >= deadline => {
                tracing::warn!(page = %page, "formatter timed out, killing");
                let _ = child.kill();
                let _ = child.wait();
                return Err(FetchError::TimedOut {
                    secs: timeout.as_secs(),
                });
            }
            None => std::thread::sleep(Duration::from_millis(20)),
        }
    };

    let stdout = stdout.join().unwrap_or_default();
    let stderr = String::from_utf8_lossy(&stderr.join().unwrap_or_default()).into_owned();
    classify_output(page, status, &stdout, &stderr)
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        buf
    })
}

/// Map the formatter's exit into the error taxonomy. Pure, so the mapping
/// is testable without spawning anything.
fn classify_output(
    page: &str,
    status: ExitStatus,
    stdout: &[u8],
    stderr: &str,
) -> Result<String, FetchError> {
    if !status.success() {
        if status.code() == Some(EXIT_NOT_FOUND) || stderr.contains("No manual entry") {
            return Err(FetchError::NotFound {
                page: page.to_string(),
            });
        }
        tracing::warn!(page = %page, status = %status, "formatter failed");
        return Err(FetchError::Formatter {
            status,
            stderr: stderr.trim().to_string(),
        });
    }

    let html = String::from_utf8_lossy(stdout);
    if html.trim().is_empty() {
        tracing::warn!(page = %page, "formatter produced empty output");
        return Err(FetchError::EmptyOutput {
            page: page.to_string(),
        });
    }

    tracing::debug!(page = %page, bytes = html.len(), "fetched page HTML");
    Ok(html.into_owned())
}
