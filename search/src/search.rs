//! The shared search skeleton.
//!
//! Every algorithm runs the same loop: pop a node from the frontier, stop if
//! it is a goal, otherwise close it, count the expansion and hand every
//! neighbor to the strategy's `reach`. What differs between BFS, A* and
//! IDDFS is the frontier type, how starting nodes are built, and what `reach`
//! does with a candidate. That is the [`Strategy`] seam.

use std::time::Instant;

use tracing::{debug, trace};
use waypoint_kernel::error::DomainError;
use waypoint_kernel::problem::{ActionOf, Problem, StateOf};
use waypoint_kernel::space::{Cost, Space, State};

use crate::closed::Closed;
use crate::error::SearchError;
use crate::frontier::Open;
use crate::node::{Node, NodeArena, NodeId, Solution};
use crate::stats::{SearchStats, Termination};

/// A search algorithm bound to one problem.
///
/// Object safe, so callers can pick an algorithm at runtime.
pub trait SearchAlgorithm {
    type State;
    type Action;

    /// Short stable name (`"bfs"`, `"astar"`, `"iddfs"`).
    fn name(&self) -> &'static str;

    /// Run the search from scratch.
    ///
    /// Returns `Ok(None)` when no goal is reachable. Counters from a previous
    /// call are discarded.
    ///
    /// # Errors
    ///
    /// [`SearchError::Domain`] with [`DomainError::EmptyStartSet`] if the
    /// problem has no starting state, [`SearchError::InvalidPolicy`] if the
    /// algorithm's policy is unusable, or any error raised by the space while
    /// enumerating neighbors.
    fn search(&mut self) -> Result<Option<Solution<Self::State, Self::Action>>, SearchError>;

    /// Counters of the last run.
    fn stats(&self) -> &SearchStats;

    /// Why the last run stopped. `None` before the first run or after a run
    /// that failed with an error.
    fn termination(&self) -> Option<Termination>;
}

/// Node arena, frontier, closed set and counters of one search invocation.
#[derive(Debug)]
pub struct SearchTree<S, A, O> {
    pub nodes: NodeArena<S, A>,
    pub open: O,
    pub closed: Closed<S>,
    pub stats: SearchStats,
    next_creation_order: u64,
}

/// The [`SearchTree`] for problem `P` with frontier `O`.
pub type TreeOf<P, O> = SearchTree<StateOf<P>, ActionOf<P>, O>;

impl<S, A, O> SearchTree<S, A, O>
where
    S: State,
    O: Open<S>,
{
    #[must_use]
    pub fn new(open: O) -> Self {
        Self {
            nodes: NodeArena::new(),
            open,
            closed: Closed::new(),
            stats: SearchStats::default(),
            next_creation_order: 0,
        }
    }

    /// Instantiate a node without storing it.
    ///
    /// Counts toward `nodes_created` and consumes a creation order whether or
    /// not the node is later inserted.
    pub fn make_node(
        &mut self,
        state: S,
        action: Option<A>,
        parent: Option<NodeId>,
        g: Cost,
        h: Cost,
    ) -> Node<S, A> {
        let depth = parent.map_or(0, |p| self.nodes[p].depth.saturating_add(1));
        let creation_order = self.next_creation_order;
        self.next_creation_order += 1;
        self.stats.nodes_created += 1;
        Node {
            state,
            action,
            parent,
            g,
            h,
            depth,
            creation_order,
        }
    }

    /// Store `node` in the arena and offer it to the frontier.
    ///
    /// A node the frontier rejects is dropped from the arena again and
    /// `None` is returned.
    pub fn insert(&mut self, node: Node<S, A>) -> Option<NodeId> {
        let id = self.nodes.push(node);
        if !self.open.push(id, &self.nodes[id]) {
            self.nodes.discard_last();
            return None;
        }
        let size = u64::try_from(self.open.len()).unwrap_or(u64::MAX);
        self.stats.open_high_water = self.stats.open_high_water.max(size);
        Some(id)
    }

    /// Drop every node and empty both sets, keeping counters and the
    /// creation-order sequence. Used between deepening iterations.
    pub fn reset_frontier(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.closed.clear();
    }
}

/// What distinguishes one algorithm from another.
pub trait Strategy<P: Problem> {
    type Open: Open<StateOf<P>>;

    fn name(&self) -> &'static str;

    /// A fresh, empty frontier.
    fn create_open(&self) -> Self::Open;

    /// The root node for `state`. Must be built with
    /// [`SearchTree::make_node`] so it is counted.
    fn create_starting_node(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: &StateOf<P>,
    ) -> Node<StateOf<P>, ActionOf<P>>;

    /// Decide what to do with `state`, reached from `parent` via `action`.
    fn reach(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: StateOf<P>,
        action: ActionOf<P>,
        parent: NodeId,
    );

    /// Queue a root node. Roots are seeded in start order and
    /// [`finish_expansion`](Self::finish_expansion) runs once they all are.
    fn seed(&mut self, tree: &mut TreeOf<P, Self::Open>, node: Node<StateOf<P>, ActionOf<P>>) {
        tree.insert(node);
    }

    /// Called once every neighbor of the expanded node has been reached.
    fn finish_expansion(&mut self, _tree: &mut TreeOf<P, Self::Open>) {}

    /// Whether a popped non-goal node may be expanded. Depth-bounded passes
    /// say no at the bound.
    fn admits(&mut self, _node: &Node<StateOf<P>, ActionOf<P>>) -> bool {
        true
    }
}

/// Seed the frontier from the problem's starts and run the loop until a goal
/// is popped or the frontier is empty.
pub(crate) fn run_pass<P, St>(
    problem: &P,
    strategy: &mut St,
    tree: &mut TreeOf<P, St::Open>,
) -> Result<Option<NodeId>, SearchError>
where
    P: Problem,
    St: Strategy<P>,
{
    for start in problem.starts() {
        let node = strategy.create_starting_node(tree, start);
        strategy.seed(tree, node);
    }
    strategy.finish_expansion(tree);

    while let Some(id) = tree.open.pop() {
        let node = &tree.nodes[id];
        if problem.is_goal(&node.state) {
            return Ok(Some(id));
        }
        if !strategy.admits(node) {
            continue;
        }
        let state = node.state.clone();
        trace!(
            creation_order = node.creation_order,
            g = node.g,
            depth = node.depth,
            "expand"
        );
        tree.closed.insert(state.clone(), id);
        tree.stats.expansions += 1;
        for (action, next) in problem.space().neighbors(&state)? {
            tree.stats.states_generated += 1;
            strategy.reach(tree, next, action, id);
        }
        strategy.finish_expansion(tree);
    }
    Ok(None)
}

/// Wall time since `started`, at least 1 so a finished search never reports
/// the unset value.
pub(crate) fn elapsed_ns(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_nanos())
        .unwrap_or(u64::MAX)
        .max(1)
}

pub(crate) fn log_finish(name: &str, termination: Termination, stats: &SearchStats) {
    debug!(
        algorithm = name,
        termination = termination.as_str(),
        expansions = stats.expansions,
        nodes_created = stats.nodes_created,
        nodes_updated = stats.nodes_updated,
        states_generated = stats.states_generated,
        states_reached = stats.states_reached,
        open_high_water = stats.open_high_water,
        iterations = stats.iterations,
        time_ns = stats.time_ns,
        "search finished"
    );
}

/// A single-pass search: one frontier, one loop.
///
/// BFS and A* are this type with different strategies; see
/// [`Bfs`](crate::bfs::Bfs) and [`AStar`](crate::astar::AStar).
pub struct GraphSearch<'p, P, St> {
    problem: &'p P,
    strategy: St,
    stats: SearchStats,
    termination: Option<Termination>,
}

impl<'p, P, St> GraphSearch<'p, P, St>
where
    P: Problem,
    St: Strategy<P>,
{
    pub fn with_strategy(problem: &'p P, strategy: St) -> Self {
        Self {
            problem,
            strategy,
            stats: SearchStats::default(),
            termination: None,
        }
    }

    #[must_use]
    pub fn problem(&self) -> &'p P {
        self.problem
    }
}

impl<P, St> SearchAlgorithm for GraphSearch<'_, P, St>
where
    P: Problem,
    St: Strategy<P>,
{
    type State = StateOf<P>;
    type Action = ActionOf<P>;

    fn name(&self) -> &'static str {
        self.strategy.name()
    }

    fn search(&mut self) -> Result<Option<Solution<StateOf<P>, ActionOf<P>>>, SearchError> {
        self.stats = SearchStats::default();
        self.termination = None;
        if self.problem.starts().is_empty() {
            return Err(DomainError::EmptyStartSet.into());
        }

        let started = Instant::now();
        debug!(
            algorithm = self.strategy.name(),
            starts = self.problem.starts().len(),
            "search started"
        );

        let mut tree = SearchTree::new(self.strategy.create_open());
        let outcome = run_pass(self.problem, &mut self.strategy, &mut tree);
        tree.stats.iterations = 1;
        tree.stats.time_ns = elapsed_ns(started);
        self.stats = tree.stats;
        let found = outcome?;

        let termination = if found.is_some() {
            Termination::GoalReached
        } else {
            Termination::FrontierExhausted
        };
        self.termination = Some(termination);
        log_finish(self.strategy.name(), termination, &self.stats);
        Ok(found.map(|id| Solution::from_arena(&tree.nodes, id)))
    }

    fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn termination(&self) -> Option<Termination> {
        self.termination
    }
}
