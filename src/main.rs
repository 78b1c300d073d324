//! Word Ladder CLI
//!
//! Builds a ladder between two words and prints it.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use word_ladder::{load_dictionary, Dictionary, LadderSearch, NeighborPolicy};

#[derive(Parser)]
#[command(name = "word-ladder")]
#[command(about = "Find a word ladder between two dictionary words")]
#[command(version)]
struct Cli {
    /// Start word
    #[arg(default_value = "cat")]
    start: String,

    /// Stop word
    #[arg(default_value = "cot")]
    stop: String,

    /// Newline-delimited word list (defaults to the built-in list)
    #[arg(short, long, env = "WORD_LADDER_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Candidate admission policy
    #[arg(short, long, value_enum, default_value = "adjacent")]
    policy: NeighborPolicy,

    /// Log every expansion step
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "word_ladder=debug"
    } else {
        "word_ladder=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = match &cli.dictionary {
        Some(path) => Dictionary::load(path)?,
        None => load_dictionary().context("Built-in word list is unusable")?,
    };

    let start = cli.start.to_lowercase();
    let stop = cli.stop.to_lowercase();
    println!("Start word: {}, Stop word: {}", start, stop);

    let mut search = LadderSearch::new(dictionary).with_policy(cli.policy);
    let ladder = search
        .find_path(&start, &stop)
        .with_context(|| format!("Search from '{}' to '{}' failed", start, stop))?;

    println!("{}", ladder);
    Ok(())
}
