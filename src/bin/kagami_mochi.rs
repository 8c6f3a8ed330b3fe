use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::Parser;
use hop_dp::problems::kagami::{count_stackable_pairs, RawInput, SortedMochis};
use tracing_subscriber::{filter::LevelFilter, fmt};

/// Count the kagami mochi that can be built from the sizes on stdin.
///
/// Input: the number of mochi on the first line, then their sizes separated
/// by whitespace.
#[derive(Debug, Parser)]
#[command(name = "kagami_mochi", version)]
struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(level_for(cli.verbose));

    if let Err(err) = run() {
        eprintln!("kagami_mochi: {err:#}");
        process::exit(1);
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}

fn run() -> anyhow::Result<()> {
    let raw = RawInput::read_from(io::stdin().lock()).context("failed to read mochi sizes")?;
    tracing::info!(count = raw.count, "read input");

    let sorted = SortedMochis::from_raw(raw);
    let pairs = count_stackable_pairs(&sorted);

    let mut out = io::stdout().lock();
    writeln!(out, "{pairs}").context("failed to write answer")?;
    Ok(())
}
