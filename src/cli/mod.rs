//! Command-line interface for update-words

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use wordlist_merge::{merge_with_summary, MergePaths};

/// Merge the canonical words.json list into words.txt, lowercased, deduplicated and sorted
#[derive(Parser)]
#[command(name = "update-words")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let paths = MergePaths::default();
    let summary = merge_with_summary(&paths).with_context(|| {
        format!("Failed to merge {} into {}", paths.source.display(), paths.working.display())
    })?;

    println!("updated all words. current word count: {}", summary.total);
    Ok(())
}
