//! Typed search errors.
//!
//! Exhausting the frontier is not an error: `search()` returns `Ok(None)` and
//! the reason is recorded as a [`Termination`](crate::stats::Termination).
//! `SearchError` covers pre-flight policy failures and collaborator errors,
//! which abort the run and propagate unchanged.

use waypoint_kernel::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A space or problem failed while the search was consulting it.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The policy cannot be honoured. Raised before any node is created.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
