//! fzpick binary.
//!
//! Reads candidate lines from stdin or a file, hands them to the configured
//! fuzzy finder, and prints the chosen lines to stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use fzpick::{Config, FzfPrompt, Options};

/// fzpick command line arguments.
#[derive(Parser, Debug)]
#[command(name = "fzpick")]
#[command(version, about = "Pick lines with an external fuzzy finder")]
struct Args {
    /// Read candidate lines from this file instead of stdin
    file: Option<PathBuf>,

    /// Allow picking more than one line
    #[arg(short, long)]
    multi: bool,

    /// Start the finder with an initial query
    #[arg(short, long)]
    query: Option<String>,

    /// Finder executable to use (overrides config and FZPICK_FINDER)
    #[arg(long, value_name = "PATH")]
    finder: Option<String>,

    /// Extra flag passed to the finder verbatim (repeatable)
    #[arg(short = 'o', long = "option", value_name = "FLAG")]
    options: Vec<String>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Log to stderr; stdout carries the selection.
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load().with_overrides(args.finder);
    let prompt = FzfPrompt::from_config(&config)?;

    let lines = read_lines(args.file.as_deref())?;

    let mut options = Options::new();
    if args.multi {
        options = options.flag("multi");
    }
    if let Some(query) = &args.query {
        options = options.value("query", query);
    }
    for flag in &args.options {
        options = options.raw(flag.clone());
    }

    let picked = prompt.select(lines, &options)?;
    if picked.is_empty() {
        // Same convention as the finder itself: nothing picked, exit 1.
        std::process::exit(1);
    }
    for line in picked {
        println!("{line}");
    }

    Ok(())
}

fn read_lines(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            BufReader::new(file)
                .lines()
                .collect::<io::Result<_>>()
                .context("reading input file")
        }
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<_>>()
            .context("reading stdin"),
    }
}
