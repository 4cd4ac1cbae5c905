//! The closed set: states already expanded, with the node that expanded them.

use std::collections::HashMap;
use std::hash::Hash;

use crate::node::NodeId;

/// Expanded states.
///
/// Keeping the expanding [`NodeId`] lets A* compare a new candidate's `g`
/// against the closed path without a second map.
#[derive(Debug, Clone)]
pub struct Closed<S> {
    expanded: HashMap<S, NodeId>,
}

impl<S: Hash + Eq> Closed<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            expanded: HashMap::new(),
        }
    }

    /// Mark `state` expanded by `id`. Returns the previous node, if any.
    pub fn insert(&mut self, state: S, id: NodeId) -> Option<NodeId> {
        self.expanded.insert(state, id)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.expanded.contains_key(state)
    }

    /// The node that expanded `state`.
    #[must_use]
    pub fn get(&self, state: &S) -> Option<NodeId> {
        self.expanded.get(state).copied()
    }

    /// Forget `state` so it can be expanded again (reopening).
    pub fn remove(&mut self, state: &S) -> Option<NodeId> {
        self.expanded.remove(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

impl<S: Hash + Eq> Default for Closed<S> {
    fn default() -> Self {
        Self::new()
    }
}
