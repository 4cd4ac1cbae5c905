//! Harness runner: run a named algorithm against a problem and package the
//! outcome as a [`SearchReportV1`] with its digest.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → build algorithm by kind → search()
//!   → SearchReportV1::from_run() → canonical JSON → digest
//! ```

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use waypoint_kernel::heuristic::Heuristic;
use waypoint_kernel::problem::{ActionOf, Problem, StateOf};
use waypoint_kernel::proof::canon::CanonError;
use waypoint_kernel::proof::hash::ContentHash;
use waypoint_search::astar::AStar;
use waypoint_search::bfs::Bfs;
use waypoint_search::error::SearchError;
use waypoint_search::iddfs::Iddfs;
use waypoint_search::node::Solution;
use waypoint_search::policy::SearchPolicy;
use waypoint_search::report::SearchReportV1;
use waypoint_search::search::SearchAlgorithm;
use waypoint_search::stats::{SearchStats, Termination};

/// Error during a harness run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("report canonicalization failed: {0}")]
    Canon(#[from] CanonError),

    #[error("unknown algorithm {name:?}; expected one of: bfs, astar, iddfs")]
    UnknownAlgorithm { name: String },
}

/// The algorithms the runner can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bfs,
    AStar,
    Iddfs,
}

impl AlgorithmKind {
    pub const ALL: [Self; 3] = [Self::Bfs, Self::AStar, Self::Iddfs];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::AStar => "astar",
            Self::Iddfs => "iddfs",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmKind {
    type Err = RunError;

    fn from_str(s: &str) -> Result<Self, RunError> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| RunError::UnknownAlgorithm { name: s.to_string() })
    }
}

/// Everything a run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome<S, A> {
    pub solution: Option<Solution<S, A>>,
    pub stats: SearchStats,
    pub report: SearchReportV1,
    /// Digest of `report`'s canonical JSON.
    pub digest: ContentHash,
}

impl<S, A> RunOutcome<S, A> {
    #[must_use]
    pub fn termination(&self) -> Termination {
        self.report.termination
    }
}

/// Run `kind` on `problem`.
///
/// `heuristic` is only consulted by A*. `policy` is validated up front even
/// when the chosen algorithm ignores the offending field.
///
/// # Errors
///
/// [`RunError::Search`] for an invalid policy, an empty start set or a domain
/// failure during search; [`RunError::Canon`] if the report cannot be
/// canonicalized.
pub fn run_search<'p, P, H>(
    problem: &'p P,
    kind: AlgorithmKind,
    heuristic: H,
    policy: &SearchPolicy,
) -> Result<RunOutcome<StateOf<P>, ActionOf<P>>, RunError>
where
    P: Problem,
    H: Heuristic<StateOf<P>> + 'p,
{
    policy.validate()?;
    let mut algorithm: Box<dyn SearchAlgorithm<State = StateOf<P>, Action = ActionOf<P>> + 'p> =
        match kind {
            AlgorithmKind::Bfs => Box::new(Bfs::new(problem)),
            AlgorithmKind::AStar => Box::new(AStar::with_policy(problem, heuristic, policy)),
            AlgorithmKind::Iddfs => Box::new(Iddfs::with_policy(problem, policy)),
        };

    let solution = algorithm.search()?;
    // Every successful search records its termination.
    let termination = algorithm.termination().unwrap_or(if solution.is_some() {
        Termination::GoalReached
    } else {
        Termination::FrontierExhausted
    });
    let stats = *algorithm.stats();
    let report = SearchReportV1::from_run(algorithm.name(), termination, &stats, solution.as_ref());
    let digest = report.digest()?;
    debug!(algorithm = kind.as_str(), digest = digest.as_str(), "run complete");

    Ok(RunOutcome {
        solution,
        stats,
        report,
        digest,
    })
}
