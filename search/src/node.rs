//! Search nodes, the per-search node arena, and path reconstruction.
//!
//! Nodes never own their parent. A parent link is a [`NodeId`] into the
//! [`NodeArena`] of the search invocation that created both nodes, so parent
//! chains cannot form cycles and die with the arena.

use std::ops::Index;

use waypoint_kernel::space::{Action, Cost};

/// Index of a node in its [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One vertex of the search tree: a specific path to `state`.
///
/// Invariant: `g` is the cost of the path recorded by following `parent`
/// links back to the root. It is only the optimal cost to `state` when the
/// algorithm guarantees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<S, A> {
    /// The state this node reaches.
    pub state: S,
    /// The action that produced this node from its parent (`None` for roots).
    pub action: Option<A>,
    /// Parent node (`None` for roots).
    pub parent: Option<NodeId>,
    /// Accumulated path cost from the root.
    pub g: Cost,
    /// Heuristic estimate of the remaining cost (0 outside informed search).
    pub h: Cost,
    /// Number of actions between the root and this node.
    pub depth: u32,
    /// Per-search monotonic counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S, A> Node<S, A> {
    /// `f = g + h`, the best-first ordering value.
    #[must_use]
    pub fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }

    /// Whether this node is the root of its tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// The best-first ordering key: `(f, g, creation_order)`.
///
/// Lower `f` first. Among equal `f`, larger `g` first: the node whose
/// estimate says it is closer to a goal. Remaining ties go to the older node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: Cost,
    pub g: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.f
            .cmp(&other.f)
            .then(other.g.cmp(&self.g))
            .then(self.creation_order.cmp(&other.creation_order))
    }
}

impl<S, A> From<&Node<S, A>> for FrontierKey {
    fn from(node: &Node<S, A>) -> Self {
        Self {
            f: node.f(),
            g: node.g,
            creation_order: node.creation_order,
        }
    }
}

/// Owner of every node instantiated and kept by one search invocation.
#[derive(Debug, Clone)]
pub struct NodeArena<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: Node<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node<S, A>> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove the most recently pushed node, invalidating its id.
    pub(crate) fn discard_last(&mut self) -> Option<Node<S, A>> {
        self.nodes.pop()
    }

    /// Drop every node. Ids handed out earlier become invalid.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Ids from `id` up to its root, `id` first.
    pub fn ancestry(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(Some(id), move |current| self.nodes[current.0].parent)
    }
}

impl<S: Clone, A: Clone> NodeArena<S, A> {
    /// Reconstruct the start-to-`id` path.
    ///
    /// Terminates because a parent is always pushed before its children.
    #[must_use]
    pub fn path(&self, id: NodeId) -> Path<S, A> {
        let mut steps: Vec<PathStep<S, A>> = self
            .ancestry(id)
            .map(|n| {
                let node = &self.nodes[n.0];
                PathStep {
                    action: node.action.clone(),
                    state: node.state.clone(),
                }
            })
            .collect();
        steps.reverse();
        Path { steps }
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Index<NodeId> for NodeArena<S, A> {
    type Output = Node<S, A>;

    fn index(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }
}

/// One step of a [`Path`]: the action taken and the state it led to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStep<S, A> {
    /// `None` only for the first step (the start).
    pub action: Option<A>,
    pub state: S,
}

/// An owned, start-to-end sequence of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<S, A> {
    steps: Vec<PathStep<S, A>>,
}

impl<S, A> Path<S, A> {
    /// Number of steps, including the start.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep<S, A>> {
        self.steps.iter()
    }

    /// Visited states in order.
    pub fn states(&self) -> impl Iterator<Item = &S> + '_ {
        self.steps.iter().map(|s| &s.state)
    }

    /// Actions taken in order (one fewer than the states).
    pub fn actions(&self) -> impl Iterator<Item = &A> + '_ {
        self.steps.iter().filter_map(|s| s.action.as_ref())
    }

    #[must_use]
    pub fn start(&self) -> Option<&S> {
        self.steps.first().map(|s| &s.state)
    }

    #[must_use]
    pub fn end(&self) -> Option<&S> {
        self.steps.last().map(|s| &s.state)
    }
}

impl<S, A: Action<S>> Path<S, A> {
    /// Sum of each action's cost, taken from the state it was applied to.
    /// Saturates at [`Cost::MAX`] like a node's `g`.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.steps
            .windows(2)
            .map(|w| w[1].action.as_ref().map_or(0, |a| a.cost(&w[0].state)))
            .fold(0, Cost::saturating_add)
    }
}

impl<'a, S, A> IntoIterator for &'a Path<S, A> {
    type Item = &'a PathStep<S, A>;
    type IntoIter = std::slice::Iter<'a, PathStep<S, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// A goal node together with its reconstructed path.
///
/// Owned, so it outlives the arena of the search that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S, A> {
    node: Node<S, A>,
    path: Path<S, A>,
}

impl<S: Clone, A: Clone> Solution<S, A> {
    pub(crate) fn from_arena(nodes: &NodeArena<S, A>, id: NodeId) -> Self {
        Self {
            node: nodes[id].clone(),
            path: nodes.path(id),
        }
    }
}

impl<S, A> Solution<S, A> {
    /// The goal node.
    #[must_use]
    pub fn node(&self) -> &Node<S, A> {
        &self.node
    }

    /// The goal state.
    #[must_use]
    pub fn state(&self) -> &S {
        &self.node.state
    }

    /// Recorded cost of the goal node.
    #[must_use]
    pub fn g(&self) -> Cost {
        self.node.g
    }

    /// Start-to-goal path.
    #[must_use]
    pub fn path(&self) -> &Path<S, A> {
        &self.path
    }

    #[must_use]
    pub fn into_path(self) -> Path<S, A> {
        self.path
    }
}
