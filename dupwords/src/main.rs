//! dupwords — report accidentally repeated adjacent words in a text file.
//!
//! Two read-only passes run over the document: one for words repeated
//! across whitespace (`the the`) and one for words repeated around a slash
//! (`risk / risk`). Matching is case-insensitive and covers Latin and
//! Cyrillic letters plus digits.

mod scan;
mod words;

use anyhow::{bail, Context, Result};
use clap::Parser;
use scan::Separator;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dupwords", about = "Find duplicated adjacent words in a text file")]
struct Cli {
    /// File to scan
    file: PathBuf,

    /// Characters of context shown on each side of a finding
    #[arg(short = 'c', long, default_value_t = 20)]
    context: usize,

    /// Exit with an error when any duplicate is found
    #[arg(long)]
    strict: bool,
}

/// Render both report sections; returns the text and the finding counts
/// per pass.
fn report(text: &str, width: usize) -> (String, [usize; 2]) {
    let mut out = String::new();
    let mut counts = [0; 2];
    for (i, separator) in [Separator::Space, Separator::Slash].into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "--- {} ---", separator.heading());
        for finding in scan::scan(text, separator, width) {
            let _ = writeln!(out, "{finding}");
            counts[i] += 1;
        }
    }
    let _ = writeln!(
        out,
        "\n{} space duplicate(s), {} slash duplicate(s)",
        counts[0], counts[1]
    );
    (out, counts)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;
    tracing::info!(file = %cli.file.display(), bytes = content.len(), "scanning");

    let (output, counts) = report(&content, cli.context);
    print!("{output}");

    let total: usize = counts.iter().sum();
    if cli.strict && total > 0 {
        bail!("{} duplicate(s) found in {}", total, cli.file.display());
    }
    Ok(())
}
