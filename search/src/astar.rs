//! A* search.
//!
//! Frontier order is `(f, larger g, creation order)`, see
//! [`FrontierKey`](crate::node::FrontierKey). A candidate for a state already
//! in the frontier replaces the queued node only when strictly cheaper
//! (decrease-key). A candidate for a closed state reopens it only when
//! strictly cheaper and [`SearchPolicy::reopen_closed`] is set; with a
//! consistent heuristic that never happens.

use tracing::trace;
use waypoint_kernel::heuristic::Heuristic;
use waypoint_kernel::problem::{ActionOf, Problem, StateOf};
use waypoint_kernel::space::Action;

use crate::frontier::{KeyedOpen, PriorityOpen};
use crate::node::{Node, NodeId};
use crate::policy::SearchPolicy;
use crate::search::{GraphSearch, Strategy, TreeOf};

/// Best-first ordering by `f = g + h`.
#[derive(Debug, Clone)]
pub struct BestFirst<H> {
    heuristic: H,
    reopen_closed: bool,
}

impl<H> BestFirst<H> {
    #[must_use]
    pub fn new(heuristic: H, policy: &SearchPolicy) -> Self {
        Self {
            heuristic,
            reopen_closed: policy.reopen_closed,
        }
    }
}

/// A* over problem `P` with heuristic `H`.
pub type AStar<'p, P, H> = GraphSearch<'p, P, BestFirst<H>>;

impl<'p, P, H> GraphSearch<'p, P, BestFirst<H>>
where
    P: Problem,
    H: Heuristic<StateOf<P>>,
{
    /// A* with the default policy (reopening enabled).
    pub fn new(problem: &'p P, heuristic: H) -> Self {
        Self::with_policy(problem, heuristic, &SearchPolicy::default())
    }

    pub fn with_policy(problem: &'p P, heuristic: H, policy: &SearchPolicy) -> Self {
        Self::with_strategy(problem, BestFirst::new(heuristic, policy))
    }
}

impl<P, H> Strategy<P> for BestFirst<H>
where
    P: Problem,
    H: Heuristic<StateOf<P>>,
{
    type Open = PriorityOpen<StateOf<P>>;

    fn name(&self) -> &'static str {
        "astar"
    }

    fn create_open(&self) -> Self::Open {
        PriorityOpen::new()
    }

    fn create_starting_node(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: &StateOf<P>,
    ) -> Node<StateOf<P>, ActionOf<P>> {
        let h = self.heuristic.estimate(state);
        tree.make_node(state.clone(), None, None, 0, h)
    }

    fn reach(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: StateOf<P>,
        action: ActionOf<P>,
        parent: NodeId,
    ) {
        let from = &tree.nodes[parent];
        let g = from.g.saturating_add(action.cost(&from.state));

        if let Some(closed) = tree.closed.get(&state) {
            if !self.reopen_closed || tree.nodes[closed].g <= g {
                return;
            }
            tree.closed.remove(&state);
            let h = self.heuristic.estimate(&state);
            let node = tree.make_node(state, Some(action), Some(parent), g, h);
            trace!(creation_order = node.creation_order, g, "reopen");
            tree.insert(node);
            tree.stats.nodes_updated += 1;
            return;
        }

        let h = self.heuristic.estimate(&state);
        let node = tree.make_node(state, Some(action), Some(parent), g, h);
        match tree.open.lookup(&node.state) {
            None => {
                tree.insert(node);
                tree.stats.states_reached += 1;
            }
            Some(queued) if tree.nodes[queued].g > g => {
                trace!(
                    creation_order = node.creation_order,
                    old_g = tree.nodes[queued].g,
                    g,
                    "decrease-key"
                );
                tree.insert(node);
                tree.stats.nodes_updated += 1;
            }
            Some(_) => {}
        }
    }
}
