//! Instrumentation counters and termination reasons.

use std::fmt;

/// Counters for one `search()` invocation.
///
/// Reset at the start of every run. For iterative deepening they accumulate
/// across iterations of that run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes popped, found not to be a goal, and expanded.
    pub expansions: u64,
    /// Nodes instantiated, including starting nodes and discarded candidates.
    pub nodes_created: u64,
    /// Frontier entries replaced by a cheaper candidate, plus closed states
    /// reopened.
    pub nodes_updated: u64,
    /// Neighbors enumerated across all expansions, duplicates included.
    pub states_generated: u64,
    /// Distinct states first inserted into the frontier by `reach`. Starting
    /// states are not counted.
    pub states_reached: u64,
    /// Wall-clock duration of the run in nanoseconds. Not reproducible.
    pub time_ns: u64,
    /// Largest frontier size observed.
    pub open_high_water: u64,
    /// Depth bounds tried. 1 for single-pass algorithms.
    pub iterations: u64,
}

impl SearchStats {
    /// Counters as JSON, without `time_ns`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions,
            "iterations": self.iterations,
            "nodes_created": self.nodes_created,
            "nodes_updated": self.nodes_updated,
            "open_high_water": self.open_high_water,
            "states_generated": self.states_generated,
            "states_reached": self.states_reached,
        })
    }
}

/// Why the last search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// A goal node was popped.
    GoalReached,
    /// The frontier ran dry; no goal is reachable.
    FrontierExhausted,
    /// Iterative deepening hit `max_depth` while deeper nodes remained.
    DepthLimitReached,
}

impl Termination {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::DepthLimitReached => "depth_limit_reached",
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
