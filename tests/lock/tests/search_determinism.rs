//! In-process determinism and digest binding for search reports.

use lock_tests::scenarios::{all, fixture_lines, Scenario, MAZE};
use sha2::{Digest, Sha256};
use waypoint_harness::runner::AlgorithmKind;
use waypoint_kernel::proof::hash::DOMAIN_SEARCH_REPORT;
use waypoint_search::policy::SearchPolicy;

#[test]
fn repeated_runs_are_identical_n10() {
    let policy = SearchPolicy::default();
    let scenario = Scenario::new("maze", &MAZE);
    for kind in AlgorithmKind::ALL {
        let first = scenario.run(kind, &policy);
        let first_bytes = first.report.to_canonical_json_bytes().unwrap();
        for _ in 1..10 {
            let next = scenario.run(kind, &policy);
            assert_eq!(next.solution, first.solution, "{kind}");
            assert_eq!(next.report, first.report, "{kind}");
            assert_eq!(next.report.to_canonical_json_bytes().unwrap(), first_bytes);
            assert_eq!(next.digest, first.digest);
        }
    }
}

#[test]
fn fixture_lines_are_stable() {
    let first = fixture_lines(&AlgorithmKind::ALL);
    let second = fixture_lines(&AlgorithmKind::ALL);
    assert_eq!(first, second);
    assert!(first.iter().all(|l| !l.contains("time_ns")));
    assert!(first.contains(&"maze.astar.cost=17".to_string()));
    assert!(first.contains(&"blocked_maze.bfs.expansions=22".to_string()));
}

#[test]
fn report_digest_is_domain_separated_sha256_of_canonical_json() {
    let policy = SearchPolicy::default();
    for scenario in all() {
        let outcome = scenario.run(AlgorithmKind::AStar, &policy);
        let bytes = outcome.report.to_canonical_json_bytes().unwrap();

        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_REPORT);
        hasher.update(&bytes);
        let expected = format!("sha256:{}", hex::encode(hasher.finalize()));

        assert_eq!(outcome.digest.as_str(), expected, "{}", scenario.name);
    }
}

#[test]
fn report_json_omits_wall_clock_time() {
    let outcome = Scenario::new("maze", &MAZE).run(AlgorithmKind::Bfs, &SearchPolicy::default());
    let bytes = outcome.report.to_canonical_json_bytes().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert!(json["stats"].get("time_ns").is_none());
    assert_eq!(json["stats"]["expansions"], outcome.stats.expansions);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["termination"], "goal_reached");
}
