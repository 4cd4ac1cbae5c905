//! Open-set (frontier) containers.
//!
//! Nodes live in the [`NodeArena`](crate::node::NodeArena); frontiers hold
//! only [`NodeId`]s plus whatever per-state index their discipline needs.
//!
//! | Container        | Pop order                      | Dedup by state |
//! |------------------|--------------------------------|----------------|
//! | [`FifoOpen`]     | oldest inserted                | yes            |
//! | [`PriorityOpen`] | lowest [`FrontierKey`]         | yes, with update |
//! | [`DepthStack`]   | newest inserted                | no             |

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::heap::IndexedHeap;
use crate::node::{FrontierKey, Node, NodeId};

/// A container of discovered-but-not-expanded nodes.
pub trait Open<S> {
    /// Insert a node already stored in the arena under `id`.
    ///
    /// Returns `false` when the container rejected the node.
    fn push<A>(&mut self, id: NodeId, node: &Node<S, A>) -> bool;

    /// Remove the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    fn clear(&mut self);
}

/// An [`Open`] that holds at most one node per state and can find it.
pub trait KeyedOpen<S>: Open<S> {
    /// The node currently queued for `state`, if any.
    fn lookup(&self, state: &S) -> Option<NodeId>;

    fn contains(&self, state: &S) -> bool {
        self.lookup(state).is_some()
    }
}

/// FIFO queue with an enqueued-state index for O(1) membership.
#[derive(Debug, Clone)]
pub struct FifoOpen<S> {
    queue: VecDeque<(NodeId, S)>,
    enqueued: HashMap<S, NodeId>,
}

impl<S: Hash + Eq + Clone> FifoOpen<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            enqueued: HashMap::new(),
        }
    }
}

impl<S: Hash + Eq + Clone> Default for FifoOpen<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hash + Eq + Clone> Open<S> for FifoOpen<S> {
    /// First-discovered wins: a state already enqueued is rejected.
    fn push<A>(&mut self, id: NodeId, node: &Node<S, A>) -> bool {
        if self.enqueued.contains_key(&node.state) {
            return false;
        }
        self.enqueued.insert(node.state.clone(), id);
        self.queue.push_back((id, node.state.clone()));
        true
    }

    fn pop(&mut self) -> Option<NodeId> {
        let (id, state) = self.queue.pop_front()?;
        self.enqueued.remove(&state);
        Some(id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.enqueued.clear();
    }
}

impl<S: Hash + Eq + Clone> KeyedOpen<S> for FifoOpen<S> {
    fn lookup(&self, state: &S) -> Option<NodeId> {
        self.enqueued.get(state).copied()
    }
}

/// Heap entry: ordering key plus the node it stands for.
///
/// `creation_order` is unique per search, so the key alone is a total order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Ranked {
    key: FrontierKey,
    id: NodeId,
}

/// Priority frontier ordered by [`FrontierKey`], one entry per state.
///
/// Pushing a node for a state that is already queued replaces that entry
/// (decrease-key). Deciding whether the replacement is an improvement is the
/// caller's job.
#[derive(Debug, Clone)]
pub struct PriorityOpen<S> {
    heap: IndexedHeap<S, Ranked>,
}

impl<S: Hash + Eq + Clone> PriorityOpen<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: IndexedHeap::new(),
        }
    }

    /// The key the next pop will return.
    #[must_use]
    pub fn peek_key(&self) -> Option<FrontierKey> {
        self.heap.peek().map(|(_, r)| r.key)
    }
}

impl<S: Hash + Eq + Clone> Default for PriorityOpen<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Hash + Eq + Clone> Open<S> for PriorityOpen<S> {
    fn push<A>(&mut self, id: NodeId, node: &Node<S, A>) -> bool {
        let ranked = Ranked {
            key: FrontierKey::from(node),
            id,
        };
        self.heap.push(node.state.clone(), ranked);
        true
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|(_, r)| r.id)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<S: Hash + Eq + Clone> KeyedOpen<S> for PriorityOpen<S> {
    fn lookup(&self, state: &S) -> Option<NodeId> {
        self.heap.get(state).map(|r| r.id)
    }
}

/// LIFO stack for depth-first passes. Does not dedup: the same state may be
/// queued along different branches.
#[derive(Debug, Clone, Default)]
pub struct DepthStack {
    stack: Vec<NodeId>,
}

impl DepthStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> Open<S> for DepthStack {
    fn push<A>(&mut self, id: NodeId, _node: &Node<S, A>) -> bool {
        self.stack.push(id);
        true
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}
