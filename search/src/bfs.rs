//! Breadth-first search.

use waypoint_kernel::problem::{ActionOf, Problem, StateOf};
use waypoint_kernel::space::Action;

use crate::frontier::{FifoOpen, KeyedOpen};
use crate::node::{Node, NodeId};
use crate::search::{GraphSearch, Strategy, TreeOf};

/// FIFO frontier, first-discovered path wins.
///
/// A state already closed is skipped before a node is built. A state already
/// queued still gets a node (counted in `nodes_created`) which is then
/// discarded, so `nodes_updated` stays 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

/// Breadth-first search over problem `P`.
pub type Bfs<'p, P> = GraphSearch<'p, P, BreadthFirst>;

impl<'p, P: Problem> GraphSearch<'p, P, BreadthFirst> {
    pub fn new(problem: &'p P) -> Self {
        Self::with_strategy(problem, BreadthFirst)
    }
}

impl<P: Problem> Strategy<P> for BreadthFirst {
    type Open = FifoOpen<StateOf<P>>;

    fn name(&self) -> &'static str {
        "bfs"
    }

    fn create_open(&self) -> Self::Open {
        FifoOpen::new()
    }

    fn create_starting_node(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: &StateOf<P>,
    ) -> Node<StateOf<P>, ActionOf<P>> {
        tree.make_node(state.clone(), None, None, 0, 0)
    }

    fn reach(
        &mut self,
        tree: &mut TreeOf<P, Self::Open>,
        state: StateOf<P>,
        action: ActionOf<P>,
        parent: NodeId,
    ) {
        if tree.closed.contains(&state) {
            return;
        }
        let from = &tree.nodes[parent];
        let g = from.g.saturating_add(action.cost(&from.state));
        let node = tree.make_node(state, Some(action), Some(parent), g, 0);
        if tree.open.contains(&node.state) {
            return;
        }
        tree.insert(node);
        tree.stats.states_reached += 1;
    }
}
