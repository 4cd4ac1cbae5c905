//! Waypoint Kernel: the capability contract of the search engine.
//!
//! Concrete domains implement the traits defined here; the search crate
//! consumes nothing else from them.
//!
//! # Module Dependency Direction
//!
//! `error` ← `space` ↔ `problem`, `heuristic`; `proof` stands alone.
//!
//! # Key types
//!
//! - [`space::Space`]: neighbor generation, action replay, rendering
//! - [`space::PredefinedSpace`] / [`space::RandomAccessSpace`]: problem builders
//! - [`problem::Problem`]: starts plus goal predicate
//! - [`heuristic::Heuristic`]: cost-to-go estimate for A*
//! - [`proof::hash::canonical_hash`]: domain-separated SHA-256

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod heuristic;
pub mod problem;
pub mod proof;
pub mod space;
