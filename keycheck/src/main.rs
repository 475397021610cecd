//! keycheck — validate a translation key list and print it as a checklist.
//!
//! Reads the keys the UI looks up (from a file, or stdin when no file is
//! given), reports duplicates, and prints the sorted distinct set for
//! checking by hand against the translation dictionaries. The dictionaries
//! themselves are never opened.

mod keylist;
mod validate;

use anyhow::{bail, Context, Result};
use clap::Parser;
use keylist::KeyList;
use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use validate::Summary;

#[derive(Parser)]
#[command(
    name = "keycheck",
    about = "Check a translation key list for duplicates and print it as a checklist"
)]
struct Cli {
    /// Key list file. If omitted, reads from stdin.
    file: Option<PathBuf>,

    /// Dictionary the keys must exist in (repeatable)
    #[arg(short = 'd', long = "dict", default_values = ["ru", "kk"])]
    dicts: Vec<String>,

    /// Print per-section key counts before the checklist
    #[arg(long)]
    sections: bool,

    /// Exit with an error when duplicates are found
    #[arg(long)]
    strict: bool,
}

/// Report printing options.
struct ReportConfig<'a> {
    dicts: &'a [String],
    sections: bool,
}

/// Closing checklist line naming the dictionaries to compare against.
fn closing_line(dicts: &[String]) -> String {
    let names: Vec<String> = dicts.iter().map(|d| format!("TRANSLATIONS.{d}")).collect();
    match names.as_slice() {
        [] => "These keys should be present in every translation dictionary.".to_string(),
        [one] => format!("These keys should be present in the {one} dictionary."),
        [first, second] => {
            format!("These keys should be present in both {first} and {second} dictionaries.")
        }
        [rest @ .., last] => format!(
            "These keys should be present in all of {} and {} dictionaries.",
            rest.join(", "),
            last
        ),
    }
}

fn report(list: &KeyList, summary: &Summary, config: &ReportConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total keys to verify: {}", summary.total);
    let _ = writeln!(out, "Unique keys: {}", summary.unique.len());

    if summary.is_clean() {
        let _ = writeln!(out, "✓ No duplicate keys");
    } else {
        let found: Vec<String> = summary
            .duplicates
            .iter()
            .map(|d| format!("{} (x{})", d.key, d.count))
            .collect();
        let _ = writeln!(out, "WARNING: Duplicate keys found: {}", found.join(", "));
    }

    if config.sections {
        let _ = writeln!(out, "\nSections:");
        for section in &list.sections {
            let name = section.name.as_deref().unwrap_or("(unnamed)");
            let _ = writeln!(out, "  {name}: {}", section.keys.len());
        }
    }

    let _ = writeln!(out, "\nAll keys that need translations:");
    for (i, key) in summary.unique.iter().enumerate() {
        let _ = writeln!(out, "{:3}. {}", i + 1, key);
    }

    let _ = writeln!(out, "\n✓ Verification list generated.");
    let _ = writeln!(out, "{}", closing_line(config.dicts));
    out
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let input = read_input(cli.file.as_deref())?;
    let list = keylist::parse(&input);
    let summary = validate::validate(list.keys());
    tracing::info!(total = summary.total, sections = list.sections.len(), "key list loaded");

    for key in &summary.malformed {
        tracing::warn!(key = %key, "key is not a plain identifier");
    }

    let config = ReportConfig {
        dicts: &cli.dicts,
        sections: cli.sections,
    };
    print!("{}", report(&list, &summary, &config));

    if cli.strict && !summary.is_clean() {
        bail!("{} duplicate key(s)", summary.duplicates.len());
    }
    Ok(())
}
