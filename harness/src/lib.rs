//! Waypoint Harness: concrete worlds and a runner for the search engine.
//!
//! Worlds implement the kernel's `Space` contracts and carry their own
//! heuristics. The runner picks an algorithm by name, runs it, and packages
//! the outcome as a digest-stamped `SearchReportV1`.
//!
//! The harness does not implement search logic; it delegates to
//! `waypoint-search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod runner;
pub mod worlds;
