//! Small explicit graphs for unit tests.

use std::fmt;

use waypoint_kernel::error::DomainError;
use waypoint_kernel::space::{Action, Cost, Space};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: u32,
    pub cost: Cost,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "->{}", self.to)
    }
}

impl Action<u32> for Edge {
    fn cost(&self, _from: &u32) -> Cost {
        self.cost
    }
}

/// Directed graph over `0..n` with per-edge costs. Neighbor order is edge
/// insertion order.
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    adjacency: Vec<Vec<Edge>>,
    broken: Option<u32>,
}

impl Digraph {
    pub fn new(n: u32) -> Self {
        Self {
            adjacency: vec![Vec::new(); n as usize],
            broken: None,
        }
    }

    pub fn edge(mut self, from: u32, to: u32, cost: Cost) -> Self {
        self.adjacency[from as usize].push(Edge { to, cost });
        self
    }

    /// `0 - 1 - … - (n-1)`, unit costs both ways, lower neighbor first.
    pub fn line(n: u32) -> Self {
        let mut graph = Self::new(n);
        for s in 0..n {
            if s > 0 {
                graph = graph.edge(s, s - 1, 1);
            }
            if s + 1 < n {
                graph = graph.edge(s, s + 1, 1);
            }
        }
        graph
    }

    /// Enumerating neighbors of `state` fails.
    pub fn broken_at(mut self, state: u32) -> Self {
        self.broken = Some(state);
        self
    }
}

impl Space for Digraph {
    type State = u32;
    type Action = Edge;

    fn neighbors(&self, state: &u32) -> Result<Vec<(Edge, u32)>, DomainError> {
        if self.broken == Some(*state) {
            return Err(DomainError::Unimplemented {
                capability: "neighbors",
            });
        }
        Ok(self.adjacency[*state as usize]
            .iter()
            .map(|e| (*e, e.to))
            .collect())
    }
}
