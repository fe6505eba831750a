//! `triple`: read `n` from stdin and print the cheapest IDA* route to `3n`.
//!
//! Output: one state per line, a blank line, then the total cost. If no
//! route exists, prints `no solution found`. Logs go to stderr (`RUST_LOG`).

use std::io::{self, BufWriter, Read, Write};

use anyhow::{Context, Result};
use log::info;

use trek_harness::worlds::operation::Operation;
use trek_search::{IdaStarSearch, SearchAlgorithm};

fn read_start() -> Result<i64> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    let token = input
        .split_whitespace()
        .next()
        .context("expected an integer on stdin")?;
    token
        .parse()
        .with_context(|| format!("not an integer: {token:?}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let n = read_start()?;
    let start = Operation::start(n);
    let goal = Operation::target_for(n)
        .with_context(|| format!("input out of range: 3 * {n} does not fit in i64"))?;
    info!("solving {start} -> {goal} with IDA*");

    let outcome = IdaStarSearch::new().search(start, &goal);
    info!(
        "{} after {} expansions, limits {:?}",
        outcome.termination, outcome.stats.expansions, outcome.stats.limits
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match outcome.into_path() {
        None => writeln!(out, "no solution found")?,
        Some(path) => {
            for state in path.states() {
                writeln!(out, "{state}")?;
            }
            writeln!(out)?;
            writeln!(out, "{}", path.cost())?;
        }
    }
    out.flush().context("failed to write stdout")?;
    Ok(())
}
