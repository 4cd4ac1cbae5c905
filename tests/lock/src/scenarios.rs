//! Single source of truth for the locked grid scenarios.
//!
//! Used by both the `search_fixture` binary and the in-process lock tests,
//! so what the cross-process harness prints and what the in-process tests
//! expect cannot drift apart.

use waypoint_harness::runner::{run_search, AlgorithmKind, RunOutcome};
use waypoint_harness::worlds::grid2d::{Cell, Grid2d, ManhattanDistance, Move};
use waypoint_kernel::space::PredefinedSpace;
use waypoint_search::policy::SearchPolicy;

/// 5-column maze whose only route to `G` snakes through every row.
pub const MAZE: [&str; 6] = ["    G", " ####", "     ", "#### ", "     ", "S    "];

/// The same maze with no goal at all: 22 open cells, all reachable.
pub const BLOCKED_MAZE: [&str; 6] = ["     ", " ####", "     ", "#### ", "     ", "S    "];

pub const CORRIDOR_LEN: usize = 100;

/// `S`, `len` open cells, `G`.
#[must_use]
pub fn corridor_from_end(len: usize) -> Vec<String> {
    vec![format!("S{}G", " ".repeat(len))]
}

/// `len` open cells on both sides of `S`, with `G` past one end.
#[must_use]
pub fn corridor_from_middle(len: usize, goal_on_left: bool) -> Vec<String> {
    let side = " ".repeat(len);
    if goal_on_left {
        vec![format!("G{side}S{side}")]
    } else {
        vec![format!("{side}S{side}G")]
    }
}

/// A named grid the fixture and the tests run every algorithm on.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub rows: Vec<String>,
}

impl Scenario {
    #[must_use]
    pub fn new<R: AsRef<str>>(name: &'static str, rows: &[R]) -> Self {
        Self {
            name,
            rows: rows.iter().map(|r| r.as_ref().to_string()).collect(),
        }
    }

    /// Run `kind` from the first start with every goal and Manhattan
    /// distance as the heuristic.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not parse or the run fails; scenarios are fixed
    /// inputs.
    #[must_use]
    pub fn run(&self, kind: AlgorithmKind, policy: &SearchPolicy) -> RunOutcome<Cell, Move> {
        let grid = Grid2d::parse(&self.rows).expect("scenario grid parses");
        let problem = grid
            .multi_goal_given()
            .next()
            .expect("scenario has a start");
        let heuristic = ManhattanDistance::for_problem(&problem);
        run_search(&problem, kind, heuristic, policy).expect("scenario run succeeds")
    }
}

/// Every locked scenario, in output order.
#[must_use]
pub fn all() -> Vec<Scenario> {
    vec![
        Scenario::new("maze", &MAZE),
        Scenario::new("blocked_maze", &BLOCKED_MAZE),
        Scenario::new("corridor_end", &corridor_from_end(CORRIDOR_LEN)),
        Scenario::new("corridor_mid_left", &corridor_from_middle(CORRIDOR_LEN, true)),
        Scenario::new("corridor_mid_right", &corridor_from_middle(CORRIDOR_LEN, false)),
    ]
}

/// The `key=value` lines the fixture binary prints for `kinds`.
///
/// Wall-clock time is left out so the lines are reproducible.
///
/// # Panics
///
/// Panics if a scenario fails to run.
#[must_use]
pub fn fixture_lines(kinds: &[AlgorithmKind]) -> Vec<String> {
    let policy = SearchPolicy::default();
    let mut lines = vec![format!(
        "policy_digest={}",
        policy.digest().expect("policy canonicalizes")
    )];
    for scenario in all() {
        for &kind in kinds {
            let outcome = scenario.run(kind, &policy);
            let prefix = format!("{}.{kind}", scenario.name);
            let stats = &outcome.stats;
            lines.push(format!("{prefix}.termination={}", outcome.termination()));
            let cost = outcome
                .solution
                .as_ref()
                .map_or_else(|| "none".to_string(), |s| s.g().to_string());
            lines.push(format!("{prefix}.cost={cost}"));
            lines.push(format!("{prefix}.expansions={}", stats.expansions));
            lines.push(format!("{prefix}.nodes_created={}", stats.nodes_created));
            lines.push(format!("{prefix}.nodes_updated={}", stats.nodes_updated));
            lines.push(format!("{prefix}.states_generated={}", stats.states_generated));
            lines.push(format!("{prefix}.states_reached={}", stats.states_reached));
            lines.push(format!("{prefix}.open_high_water={}", stats.open_high_water));
            lines.push(format!("{prefix}.iterations={}", stats.iterations));
            lines.push(format!("{prefix}.report_digest={}", outcome.digest));
        }
    }
    lines
}
