//! Concrete search domains.

pub mod grid2d;
pub mod weighted;
