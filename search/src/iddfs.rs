//! Iterative-deepening depth-first search.
//!
//! Each iteration is a depth-first pass from the starts, bounded at depth
//! `d`: nodes shallower than `d` are expanded, nodes at `d` are generated and
//! goal-tested but not expanded. Within a pass a state is never revisited
//! along the current root path; siblings may revisit it. The arena, frontier
//! and closed set are rebuilt for every bound, counters are not.

use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;
use waypoint_kernel::error::DomainError;
use waypoint_kernel::problem::{ActionOf, Problem, StateOf};
use waypoint_kernel::space::{Action, State};

use crate::error::SearchError;
use crate::frontier::DepthStack;
use crate::node::{Node, NodeId, Solution};
use crate::policy::SearchPolicy;
use crate::search::{elapsed_ns, log_finish, run_pass, SearchAlgorithm, SearchTree, Strategy, TreeOf};
use crate::stats::{SearchStats, Termination};

/// One depth-bounded pass.
struct DepthBounded<S, A> {
    bound: u32,
    /// Set when a node at the bound was popped: a deeper pass may find more.
    cutoff: bool,
    /// Roots, or children of the node being expanded, pushed after the last
    /// one so the first start and the first neighbor are explored first.
    pending: Vec<Node<S, A>>,
    /// Every state ever inserted, across all passes.
    reached: HashSet<S>,
}

impl<S: State, A> DepthBounded<S, A> {
    fn new(starts: &[S]) -> Self {
        Self {
            bound: 0,
            cutoff: false,
            pending: Vec::new(),
            reached: starts.iter().cloned().collect(),
        }
    }

    fn begin(&mut self, bound: u32) {
        self.bound = bound;
        self.cutoff = false;
        self.pending.clear();
    }
}

impl<P: Problem> Strategy<P> for DepthBounded<StateOf<P>, ActionOf<P>> {
    type Open = DepthStack;

    fn name(&self) -> &'static str {
        "iddfs"
    }

    fn create_open(&self) -> DepthStack {
        DepthStack::new()
    }

    fn create_starting_node(
        &mut self,
        tree: &mut TreeOf<P, DepthStack>,
        state: &StateOf<P>,
    ) -> Node<StateOf<P>, ActionOf<P>> {
        tree.make_node(state.clone(), None, None, 0, 0)
    }

    fn reach(
        &mut self,
        tree: &mut TreeOf<P, DepthStack>,
        state: StateOf<P>,
        action: ActionOf<P>,
        parent: NodeId,
    ) {
        if tree
            .nodes
            .ancestry(parent)
            .any(|id| tree.nodes[id].state == state)
        {
            return;
        }
        let from = &tree.nodes[parent];
        let g = from.g.saturating_add(action.cost(&from.state));
        if self.reached.insert(state.clone()) {
            tree.stats.states_reached += 1;
        }
        let node = tree.make_node(state, Some(action), Some(parent), g, 0);
        self.pending.push(node);
    }

    fn seed(&mut self, _tree: &mut TreeOf<P, DepthStack>, node: Node<StateOf<P>, ActionOf<P>>) {
        self.pending.push(node);
    }

    fn finish_expansion(&mut self, tree: &mut TreeOf<P, DepthStack>) {
        while let Some(node) = self.pending.pop() {
            tree.insert(node);
        }
    }

    fn admits(&mut self, node: &Node<StateOf<P>, ActionOf<P>>) -> bool {
        if node.depth < self.bound {
            return true;
        }
        self.cutoff = true;
        false
    }
}

/// Iterative-deepening DFS over problem `P`.
///
/// Optimal in path length, and so in cost on unit-cost spaces. Memory is
/// linear in the depth bound times the branching factor.
pub struct Iddfs<'p, P> {
    problem: &'p P,
    policy: SearchPolicy,
    stats: SearchStats,
    termination: Option<Termination>,
}

impl<'p, P: Problem> Iddfs<'p, P> {
    /// Unbounded deepening.
    pub fn new(problem: &'p P) -> Self {
        Self::with_policy(problem, &SearchPolicy::default())
    }

    pub fn with_policy(problem: &'p P, policy: &SearchPolicy) -> Self {
        Self {
            problem,
            policy: *policy,
            stats: SearchStats::default(),
            termination: None,
        }
    }
}

impl<P: Problem> SearchAlgorithm for Iddfs<'_, P> {
    type State = StateOf<P>;
    type Action = ActionOf<P>;

    fn name(&self) -> &'static str {
        "iddfs"
    }

    fn search(&mut self) -> Result<Option<Solution<StateOf<P>, ActionOf<P>>>, SearchError> {
        self.stats = SearchStats::default();
        self.termination = None;
        self.policy.validate()?;
        if self.problem.starts().is_empty() {
            return Err(DomainError::EmptyStartSet.into());
        }

        let started = Instant::now();
        debug!(
            algorithm = "iddfs",
            starts = self.problem.starts().len(),
            max_depth = ?self.policy.max_depth,
            "search started"
        );

        let mut pass = DepthBounded::new(self.problem.starts());
        let mut tree = SearchTree::new(DepthStack::new());
        let mut bound = 0u32;
        let (found, termination) = loop {
            pass.begin(bound);
            tree.stats.iterations += 1;
            let outcome = run_pass(self.problem, &mut pass, &mut tree);
            debug!(
                bound,
                expansions = tree.stats.expansions,
                cutoff = pass.cutoff,
                "deepening iteration finished"
            );
            match outcome {
                Err(err) => {
                    tree.stats.time_ns = elapsed_ns(started);
                    self.stats = tree.stats;
                    return Err(err);
                }
                Ok(Some(id)) => {
                    break (Some(Solution::from_arena(&tree.nodes, id)), Termination::GoalReached);
                }
                Ok(None) if !pass.cutoff => break (None, Termination::FrontierExhausted),
                Ok(None) => {}
            }
            if self.policy.max_depth.is_some_and(|max| bound >= max) {
                break (None, Termination::DepthLimitReached);
            }
            bound += 1;
            tree.reset_frontier();
        };

        tree.stats.time_ns = elapsed_ns(started);
        self.stats = tree.stats;
        self.termination = Some(termination);
        log_finish("iddfs", termination, &self.stats);
        Ok(found)
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn termination(&self) -> Option<Termination> {
        self.termination
    }
}
