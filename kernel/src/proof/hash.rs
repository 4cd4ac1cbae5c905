//! Content-addressed hashing with domain separation.
//!
//! Every digest is `SHA-256(domain || data)` where `domain` is a
//! null-terminated prefix naming the artifact kind. Two artifacts of different
//! kinds can therefore never collide even when their bytes are identical.

use sha2::{Digest, Sha256};

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"algorithm:hex_digest"` (e.g., `"sha256:abcdef..."`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
    colon: usize,
}

impl ContentHash {
    /// Parse from `"algorithm:hex"` format.
    ///
    /// Returns `None` if the colon is missing or either side is empty.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let colon = s.find(':')?;
        if colon == 0 || colon == s.len() - 1 {
            return None;
        }
        Some(Self {
            full: s.to_string(),
            colon,
        })
    }

    /// The algorithm portion (e.g., "sha256").
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.full[..self.colon]
    }

    /// The hex digest portion.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full[self.colon + 1..]
    }

    /// The full `"algorithm:hex_digest"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Domain prefix for search report digests.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYPOINT::SEARCH_REPORT::V1\0";

/// Domain prefix for search policy digests.
pub const DOMAIN_SEARCH_POLICY: &[u8] = b"WAYPOINT::SEARCH_POLICY::V1\0";

/// Compute `sha256(domain || data)` as a [`ContentHash`].
#[must_use]
pub fn canonical_hash(domain: &[u8], data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    let hex = hex::encode(hasher.finalize());
    ContentHash {
        colon: "sha256".len(),
        full: format!("sha256:{hex}"),
    }
}
