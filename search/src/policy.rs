//! Search policy: the knobs an algorithm reads before it starts.

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_POLICY};

use crate::error::SearchError;

/// Configuration shared by every algorithm. Each algorithm reads only the
/// fields that apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// A*: move a closed state back to the frontier when a strictly cheaper
    /// path to it is found.
    pub reopen_closed: bool,
    /// IDDFS: largest depth bound to try. `None` means unbounded.
    pub max_depth: Option<u32>,
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            reopen_closed: true,
            max_depth: None,
        }
    }
}

impl SearchPolicy {
    #[must_use]
    pub fn with_reopen_closed(mut self, reopen_closed: bool) -> Self {
        self.reopen_closed = reopen_closed;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Reject policies no algorithm can run under.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_depth` is `Some(0)`,
    /// which could only ever goal-test the starting states.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_depth == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_depth must be at least 1".into(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_depth": self.max_depth,
            "reopen_closed": self.reopen_closed,
        })
    }

    /// Content hash of the canonical policy JSON.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json())?;
        Ok(canonical_hash(DOMAIN_SEARCH_POLICY, &bytes))
    }
}
