use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod fetch;
mod pages;
mod repl;

fn main() -> Result<()> {
    // Log to stderr so stdout stays clean for rendered Markdown
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    repl::run()
}
