//! Cross-process determinism of run reports.
//!
//! Spawns the `solve_fixture` binary under 4 environment variants and asserts
//! all produce identical output.

use std::path::Path;
use std::process::Command;

fn binary_path() -> String {
    env!("CARGO_BIN_EXE_solve_fixture").to_string()
}

fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "solve_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_four_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    // Sanity checks.
    for line in [
        "ida.30.cost=18",
        "ida.-23.cost=13",
        "ida.54.cost=30",
        "ucs.30.termination=goal_reached",
        "astar.-23.termination=goal_reached",
    ] {
        assert!(
            baseline.lines().any(|l| l == line),
            "baseline output missing {line}"
        );
    }
    assert_eq!(
        baseline
            .lines()
            .filter(|l| l.contains(".report_digest=sha256:"))
            .count(),
        9
    );

    // Variant 2: different cwd.
    let alt_cwd = if cfg!(target_os = "windows") {
        "C:\\"
    } else {
        "/tmp"
    };
    let variant_cwd = run_variant(alt_cwd, &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to {alt_cwd}"
    );

    // Variant 3: different locale env.
    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    // Variant 4: spurious env vars, logging switched on.
    let variant_noise = run_variant(
        &root,
        &[
            ("TREK_NOISE", "should_not_matter"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
            ("RUST_LOG", "trace"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars"
    );
}

#[test]
fn inproc_reports_match_fixture_output() {
    use trek_harness::policy::PolicyConfig;
    use trek_harness::runner::run_operation;
    use trek_search::AlgorithmKind;

    let baseline = run_variant(&workspace_root(), &[]);
    let report =
        run_operation(30, AlgorithmKind::IdaStar, &PolicyConfig::default()).expect("run");
    let expected = format!("ida.30.report_digest={}", report.digest.as_str());
    assert!(baseline.lines().any(|l| l == expected));
}
