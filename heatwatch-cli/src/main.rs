//! Binary crate for the `heatwatch` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Running each city through the shared analysis pipeline
//! - Human-friendly table output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
