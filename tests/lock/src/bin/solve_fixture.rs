//! Binary that runs the tripling puzzle through every algorithm and prints
//! deterministic output lines for cross-process verification.
//!
//! Usage: `solve_fixture`
//!
//! Output: one `<algorithm>.<n>.<field>=<value>` line per field.

use anyhow::{Context, Result};
use trek_harness::policy::PolicyConfig;
use trek_harness::runner::run_operation;
use trek_search::AlgorithmKind;

const STARTS: &[i64] = &[-23, 30, 54];

fn main() -> Result<()> {
    let config = PolicyConfig::default();
    for &kind in &AlgorithmKind::ALL {
        for &n in STARTS {
            let report = run_operation(n, kind, &config)
                .with_context(|| format!("{kind} run from {n} failed"))?;
            let cost = report
                .cost
                .map_or_else(|| "none".to_string(), |c| c.to_string());
            println!("{kind}.{n}.report_digest={}", report.digest.as_str());
            println!("{kind}.{n}.termination={}", report.termination);
            println!("{kind}.{n}.cost={cost}");
            println!("{kind}.{n}.expansions={}", report.stats.expansions);
        }
    }
    Ok(())
}
