//! Lock tests for search counters on the fixed grid scenarios.
//!
//! Counters are part of the observable contract: a change to any of these
//! numbers is a behavior change, not a refactor.

use lock_tests::scenarios::{
    corridor_from_end, corridor_from_middle, Scenario, BLOCKED_MAZE, CORRIDOR_LEN, MAZE,
};
use waypoint_harness::runner::{AlgorithmKind, RunOutcome};
use waypoint_harness::worlds::grid2d::{Cell, Move};
use waypoint_search::policy::SearchPolicy;
use waypoint_search::stats::Termination;

const L: u64 = CORRIDOR_LEN as u64;

fn run(scenario: &Scenario, kind: AlgorithmKind) -> RunOutcome<Cell, Move> {
    scenario.run(kind, &SearchPolicy::default())
}

// ---------------------------------------------------------------------------
// No path: every reachable state is expanded exactly once
// ---------------------------------------------------------------------------

#[test]
fn blocked_maze_expands_every_open_cell_once() {
    let scenario = Scenario::new("blocked_maze", &BLOCKED_MAZE);
    for kind in [AlgorithmKind::Bfs, AlgorithmKind::AStar] {
        let outcome = run(&scenario, kind);
        assert!(outcome.solution.is_none(), "{kind}");
        assert_eq!(outcome.termination(), Termination::FrontierExhausted);
        assert_eq!(outcome.stats.expansions, 22, "{kind}");
        assert_eq!(outcome.stats.states_reached, 21, "{kind}");
        assert_eq!(outcome.stats.nodes_updated, 0, "{kind}");
        assert!(outcome.report.path.is_none());
    }
}

#[test]
fn blocked_maze_iddfs_reexpands_across_iterations() {
    let scenario = Scenario::new("blocked_maze", &BLOCKED_MAZE);
    let outcome = run(&scenario, AlgorithmKind::Iddfs);
    assert!(outcome.solution.is_none());
    assert_eq!(outcome.termination(), Termination::FrontierExhausted);
    assert!(outcome.stats.expansions > 22);
    assert_eq!(outcome.stats.states_reached, 21);
}

// ---------------------------------------------------------------------------
// Maze with a goal: every algorithm finds the 17-step path
// ---------------------------------------------------------------------------

#[test]
fn maze_path_is_optimal_for_every_algorithm() {
    let scenario = Scenario::new("maze", &MAZE);
    for kind in AlgorithmKind::ALL {
        let outcome = run(&scenario, kind);
        let solution = outcome.solution.as_ref().expect("maze is solvable");
        assert_eq!(solution.g(), 17, "{kind}");
        assert_eq!(solution.path().cost(), solution.g(), "{kind}");
        assert_eq!(solution.path().len(), 18, "{kind}");
        assert_eq!(outcome.termination(), Termination::GoalReached);
        let path = outcome.report.path.as_ref().expect("report carries path");
        assert_eq!(path.cost, 17);
        assert_eq!(path.states.first().map(String::as_str), Some("(5, 0)"));
        assert_eq!(path.states.last().map(String::as_str), Some("(0, 4)"));
    }
}

#[test]
fn maze_iddfs_needs_more_than_one_pass_worth_of_expansions() {
    let outcome = run(&Scenario::new("maze", &MAZE), AlgorithmKind::Iddfs);
    assert!(outcome.stats.expansions > 21);
    assert_eq!(outcome.stats.iterations, 18);
}

#[test]
fn bfs_never_updates() {
    for scenario in lock_tests::scenarios::all() {
        let outcome = run(&scenario, AlgorithmKind::Bfs);
        assert_eq!(outcome.stats.nodes_updated, 0, "{}", scenario.name);
        assert_eq!(outcome.stats.iterations, 1);
    }
}

// ---------------------------------------------------------------------------
// Corridors
// ---------------------------------------------------------------------------

#[test]
fn corridor_from_end_counters_are_bounded() {
    let scenario = Scenario::new("corridor_end", &corridor_from_end(CORRIDOR_LEN));
    for kind in [AlgorithmKind::Bfs, AlgorithmKind::AStar] {
        let stats = run(&scenario, kind).stats;
        assert!(L < stats.expansions && stats.expansions <= L + 1, "{kind}: {stats:?}");
        assert!(L < stats.states_reached && stats.states_reached <= L + 2, "{kind}: {stats:?}");
        assert!(
            2 * L <= stats.states_generated && stats.states_generated <= 2 * (L + 1),
            "{kind}: {stats:?}"
        );
        assert_eq!(stats.nodes_updated, 0);
    }
}

#[test]
fn astar_from_corridor_middle_creates_one_wrong_way_node() {
    for goal_on_left in [true, false] {
        let rows = corridor_from_middle(CORRIDOR_LEN, goal_on_left);
        let scenario = Scenario::new("corridor_mid", &rows);
        let outcome = run(&scenario, AlgorithmKind::AStar);
        let stats = outcome.stats;
        // Start, the wrong-way neighbor, L cells, the goal.
        assert_eq!(stats.nodes_created, L + 3, "goal_on_left={goal_on_left}");
        assert_eq!(stats.nodes_updated, 0);
        assert!(L < stats.expansions && stats.expansions <= L + 1);
        assert!(L < stats.states_reached && stats.states_reached <= L + 2);
        assert!(2 * L <= stats.states_generated && stats.states_generated <= 2 * (L + 1));
        let cost = outcome.solution.as_ref().map(|s| s.g());
        assert_eq!(cost, Some(i64::try_from(L + 1).unwrap()));
    }
}

#[test]
fn iddfs_on_corridor_pays_for_deepening() {
    let scenario = Scenario::new("corridor_end", &corridor_from_end(CORRIDOR_LEN));
    let outcome = run(&scenario, AlgorithmKind::Iddfs);
    let stats = outcome.stats;
    assert!(stats.expansions > 2 * (L + 1));
    // Bound d expands d cells: 0 + 1 + ... + (L + 1).
    assert_eq!(stats.expansions, (L + 1) * (L + 2) / 2);
    assert_eq!(stats.iterations, L + 2);
    assert_eq!(outcome.solution.map(|s| s.g()), Some(i64::try_from(L + 1).unwrap()));
}

// ---------------------------------------------------------------------------
// Policy
// ---------------------------------------------------------------------------

#[test]
fn iddfs_depth_cap_stops_short_of_maze_goal() {
    let scenario = Scenario::new("maze", &MAZE);
    let policy = SearchPolicy::default().with_max_depth(16);
    let outcome = scenario.run(AlgorithmKind::Iddfs, &policy);
    assert!(outcome.solution.is_none());
    assert_eq!(outcome.termination(), Termination::DepthLimitReached);
    assert_eq!(outcome.stats.iterations, 17);

    let policy = SearchPolicy::default().with_max_depth(17);
    let outcome = scenario.run(AlgorithmKind::Iddfs, &policy);
    assert_eq!(outcome.solution.map(|s| s.g()), Some(17));
}
