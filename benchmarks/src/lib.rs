//! Shared helpers for waypoint benchmark suites.
//!
//! A regime is a fixed grid plus the algorithms it is affordable to run on
//! it. Iterative deepening revisits every simple path up to the bound, so it
//! only runs on narrow regimes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use waypoint_harness::runner::{run_search, AlgorithmKind, RunOutcome};
use waypoint_harness::worlds::grid2d::{Cell, Grid2d, ManhattanDistance, Move};
use waypoint_kernel::space::PredefinedSpace;
use waypoint_search::astar::AStar;
use waypoint_search::bfs::Bfs;
use waypoint_search::iddfs::Iddfs;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::search::SearchAlgorithm;
use waypoint_search::stats::SearchStats;

/// A benchmark workload.
pub struct Regime {
    pub name: &'static str,
    pub grid: Grid2d,
    pub algorithms: Vec<AlgorithmKind>,
}

fn square_rows(side: usize, mut wall: impl FnMut(usize, usize) -> bool) -> Vec<String> {
    (0..side)
        .map(|r| {
            (0..side)
                .map(|c| match (r, c) {
                    (0, 0) => 'S',
                    _ if r == side - 1 && c == side - 1 => 'G',
                    _ if wall(r, c) => '#',
                    _ => ' ',
                })
                .collect()
        })
        .collect()
}

fn parse(rows: &[String]) -> Grid2d {
    Grid2d::parse(rows).expect("regime grid parses")
}

/// Empty `side`×`side` field, start and goal in opposite corners.
///
/// # Panics
///
/// Panics if `side` is below 2.
#[must_use]
pub fn regime_open_field(side: usize) -> Regime {
    assert!(side >= 2, "open field needs two cells");
    Regime {
        name: "open_field",
        grid: parse(&square_rows(side, |_, _| false)),
        algorithms: vec![AlgorithmKind::Bfs, AlgorithmKind::AStar],
    }
}

/// Seeded random walls at roughly `density`.
///
/// # Panics
///
/// Panics if `side` is below 2.
#[must_use]
pub fn regime_random_walls(side: usize, density: f64, seed: u64) -> Regime {
    assert!(side >= 2, "random walls need two cells");
    let mut rng = StdRng::seed_from_u64(seed);
    Regime {
        name: "random_walls",
        grid: parse(&square_rows(side, |_, _| rng.random_bool(density))),
        algorithms: vec![AlgorithmKind::Bfs, AlgorithmKind::AStar],
    }
}

/// No goal: every reachable cell is expanded.
#[must_use]
pub fn regime_exhaustive_dead_end(side: usize) -> Regime {
    let mut rows = square_rows(side, |_, _| false);
    if let Some(last) = rows.last_mut() {
        *last = last.replace('G', " ");
    }
    Regime {
        name: "exhaustive_dead_end",
        grid: parse(&rows),
        algorithms: vec![AlgorithmKind::Bfs, AlgorithmKind::AStar],
    }
}

/// One row: `S`, `len` open cells, `G`.
#[must_use]
pub fn regime_corridor(len: usize) -> Regime {
    Regime {
        name: "corridor",
        grid: parse(&[format!("S{}G", " ".repeat(len))]),
        algorithms: AlgorithmKind::ALL.to_vec(),
    }
}

/// Every regime the macro suites run, in report order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_open_field(64),
        regime_random_walls(64, 0.25, 7),
        regime_exhaustive_dead_end(64),
        regime_corridor(200),
    ]
}

/// Run only the algorithm, without building a report.
///
/// # Panics
///
/// Panics if the search fails. Benchmark runs are expected to succeed.
#[must_use]
pub fn search_only(grid: &Grid2d, kind: AlgorithmKind) -> SearchStats {
    let problem = grid.multi_start_and_goal_given();
    match kind {
        AlgorithmKind::Bfs => {
            let mut bfs = Bfs::new(&problem);
            bfs.search().expect("bfs should succeed in benchmarks");
            *bfs.stats()
        }
        AlgorithmKind::AStar => {
            let mut astar = AStar::new(&problem, ManhattanDistance::for_problem(&problem));
            astar.search().expect("astar should succeed in benchmarks");
            *astar.stats()
        }
        AlgorithmKind::Iddfs => {
            let mut iddfs = Iddfs::new(&problem);
            iddfs.search().expect("iddfs should succeed in benchmarks");
            *iddfs.stats()
        }
    }
}

/// Run through the harness runner: search, report, digest.
///
/// # Panics
///
/// Panics if the run fails.
#[must_use]
pub fn run_end_to_end(grid: &Grid2d, kind: AlgorithmKind) -> RunOutcome<Cell, Move> {
    let problem = grid.multi_start_and_goal_given();
    let heuristic = ManhattanDistance::for_problem(&problem);
    run_search(&problem, kind, heuristic, &SearchPolicy::default()).expect("run_search")
}
