//! Command-line front end: scan a text for patterns and print the combined
//! JSON report (match positions, trie, failure edges) to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Scan text for multiple patterns in one pass and export the automaton
/// structure as JSON.
#[derive(Parser)]
#[command(name = "skimmer", version, about)]
struct Cli {
    /// Pattern to search for (repeatable)
    #[arg(short, long = "pattern", value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Read the text from this file instead of stdin
    #[arg(short = 'f', long, value_name = "FILE")]
    text_file: Option<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let text = match &cli.text_file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read text from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            buf
        }
    };

    let report = skimmer::analyze(&cli.patterns, &text).context("failed to build automaton")?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
