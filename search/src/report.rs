//! `SearchReportV1`: a canonical, content-addressed summary of one run.
//!
//! Everything in the report is reproducible: wall-clock time is left out,
//! states and actions are recorded by their `Display` form, and numbers are
//! integers. Two runs over identical inputs produce byte-identical canonical
//! JSON and therefore equal digests.

use std::fmt::Display;

use waypoint_kernel::proof::canon::{canonical_json_bytes, CanonError};
use waypoint_kernel::proof::hash::{canonical_hash, ContentHash, DOMAIN_SEARCH_REPORT};
use waypoint_kernel::space::{Action, Cost};

use crate::node::Solution;
use crate::stats::{SearchStats, Termination};

pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// The solution path as recorded in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPathV1 {
    pub states: Vec<String>,
    pub actions: Vec<String>,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReportV1 {
    pub algorithm: String,
    pub termination: Termination,
    /// `time_ns` is carried for callers but never serialized.
    pub stats: SearchStats,
    pub path: Option<ReportPathV1>,
}

impl SearchReportV1 {
    #[must_use]
    pub fn from_run<S, A>(
        algorithm: &str,
        termination: Termination,
        stats: &SearchStats,
        solution: Option<&Solution<S, A>>,
    ) -> Self
    where
        S: Display,
        A: Action<S>,
    {
        let path = solution.map(|s| ReportPathV1 {
            states: s.path().states().map(ToString::to_string).collect(),
            actions: s.path().actions().map(ToString::to_string).collect(),
            cost: s.path().cost(),
        });
        Self {
            algorithm: algorithm.to_string(),
            termination,
            stats: *stats,
            path,
        }
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON, domain-separated.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(DOMAIN_SEARCH_REPORT, &bytes))
    }

    fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm,
            "path": self.path.as_ref().map(path_to_json),
            "schema_version": REPORT_SCHEMA_VERSION,
            "stats": self.stats.to_json(),
            "termination": self.termination.as_str(),
        })
    }
}

fn path_to_json(p: &ReportPathV1) -> serde_json::Value {
    serde_json::json!({
        "actions": p.actions,
        "cost": p.cost,
        "states": p.states,
    })
}
