//! Waypoint search: one expand/reach skeleton, three algorithms.
//!
//! This crate depends only on `waypoint_kernel`. Concrete domains live in
//! `waypoint_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! waypoint_kernel  ←  waypoint_search  ←  waypoint_harness
//! (capabilities,      (nodes, open,        (worlds, runner)
//!  problems, digest)   closed, algorithms)
//! ```
//!
//! # Key types
//!
//! - [`node::Node`], [`node::NodeArena`], [`node::Solution`]: the search
//!   tree and path reconstruction
//! - [`frontier::Open`]: FIFO, priority and depth-stack frontiers
//! - [`closed::Closed`]: expanded states
//! - [`search::Strategy`] and [`search::GraphSearch`]: the shared loop
//! - [`bfs::Bfs`], [`astar::AStar`], [`iddfs::Iddfs`]: the algorithms, all
//!   behind [`search::SearchAlgorithm`]
//! - [`report::SearchReportV1`]: canonical run summary

#![forbid(unsafe_code)]

pub mod astar;
pub mod bfs;
pub mod closed;
pub mod error;
pub mod frontier;
pub mod heap;
pub mod iddfs;
pub mod node;
pub mod policy;
pub mod report;
pub mod search;
pub mod stats;

#[cfg(test)]
mod testing;
