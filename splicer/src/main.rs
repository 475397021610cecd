//! splicer — swap the digital-truth case library for a new one.
//!
//! Replaces the static `CASES` array in the quiz page with the contents of a
//! fragment file, then rewires the start handler, case counter, case
//! renderer and end-of-game check to read a randomized per-game subset.
//!
//! Every rule reports its match count. A rule that matches anything other
//! than exactly once is logged as a warning; with `--strict` it aborts the
//! run before the page is written.

mod cases;
mod rule;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rule::RuleOutcome;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "splicer",
    about = "Splice a new case library into the digital-truth quiz page"
)]
struct Cli {
    /// HTML document to patch (overwritten in place unless -o is given)
    #[arg(default_value = "digital-truth.html")]
    document: PathBuf,

    /// Fragment holding the new case array and selection logic
    #[arg(short = 'f', long = "fragment", default_value = "NEW_CASES_AND_LOGIC.js")]
    fragment: PathBuf,

    /// Write the result here instead of overwriting the document
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Apply the rules and print the report without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Fail when any rule does not match exactly once
    #[arg(long)]
    strict: bool,
}

/// Result of running the full rule sequence over a document.
struct Splice {
    text: String,
    outcomes: Vec<RuleOutcome>,
}

impl Splice {
    fn misses(&self) -> impl Iterator<Item = &RuleOutcome> {
        self.outcomes.iter().filter(|o| !o.is_clean())
    }
}

/// Core transformation — extracted for testability.
fn splice(document: &str, fragment: &str) -> Splice {
    let rules = cases::rules(fragment);
    let (text, outcomes) = rule::apply_all(&rules, document);
    Splice { text, outcomes }
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

    let document = fs::read_to_string(&cli.document)
        .with_context(|| format!("Failed to read {}", cli.document.display()))?;
    let fragment = fs::read_to_string(&cli.fragment)
        .with_context(|| format!("Failed to read {}", cli.fragment.display()))?;
    tracing::info!(
        document = %cli.document.display(),
        fragment = %cli.fragment.display(),
        "splicing case library"
    );

    let result = splice(&document, &fragment);

    for outcome in &result.outcomes {
        println!("  {outcome}");
    }
    let misses = result.misses().count();
    for miss in result.misses() {
        tracing::warn!(rule = miss.name, hits = miss.hits, "rule did not match exactly once");
    }
    if cli.strict && misses > 0 {
        bail!(
            "{} rule(s) did not match exactly once; {} left unchanged",
            misses,
            cli.document.display()
        );
    }

    if cli.dry_run {
        println!("dry run: nothing written");
        return Ok(());
    }

    let target = cli.output.as_ref().unwrap_or(&cli.document);
    fs::write(target, &result.text)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("✓ Case library updated successfully!");
    println!("✓ Random case selection enabled");
    println!("✓ Game flow updated to use random cases");
    Ok(())
}
