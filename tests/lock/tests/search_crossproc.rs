//! Cross-process determinism for the search fixture.
//!
//! Spawns the `search_fixture` binary under four environment variants and
//! asserts all produce identical output, equal to the in-process lines.

use std::path::Path;
use std::process::{Command, Output};

use lock_tests::scenarios::fixture_lines;
use waypoint_harness::runner::AlgorithmKind;

fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("search_fixture");
    path.to_string_lossy().to_string()
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

fn spawn(work_dir: &str, args: &[&str], env_overrides: &[(&str, &str)]) -> Output {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir).args(args);

    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("WAYPOINT_LOG");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    })
}

fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let output = spawn(work_dir, &[], env_overrides);
    assert!(
        output.status.success(),
        "search_fixture exited with {}: stderr={}",
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
    assert!(baseline.starts_with("policy_digest=sha256:"));
    assert!(baseline.contains("maze.bfs.termination=goal_reached"));
    assert!(baseline.contains("blocked_maze.astar.termination=frontier_exhausted"));
    assert!(baseline.contains("maze.iddfs.cost=17"));
    assert!(baseline.contains("corridor_mid_left.astar.nodes_created=103"));

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

    // Variant 4: spurious env vars, verbose logging on stderr.
    let variant_noise = run_variant(
        &root,
        &[
            ("WAYPOINT_NOISE", "should_not_matter"),
            ("WAYPOINT_LOG", "trace"),
            ("TZ", "America/New_York"),
            ("HOME", "/nonexistent"),
        ],
    );
    assert_eq!(
        baseline, variant_noise,
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_output_matches_inprocess_lines() {
    let stdout = run_variant(&workspace_root(), &[]);
    let lines: Vec<&str> = stdout.lines().collect();
    let expected = fixture_lines(&AlgorithmKind::ALL);
    assert_eq!(lines, expected);
}

#[test]
fn single_algorithm_argument_filters_output() {
    let output = spawn(&workspace_root(), &["astar"], &[]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("stdout is valid UTF-8");
    assert!(stdout.contains("maze.astar.cost=17"));
    assert!(!stdout.contains(".bfs."));
    assert!(!stdout.contains(".iddfs."));
}

#[test]
fn unknown_algorithm_argument_fails() {
    let output = spawn(&workspace_root(), &["dijkstra"], &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("dijkstra"));
}
