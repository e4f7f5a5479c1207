//! Strongly-typed edge identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`EdgeId`] allocation.
static EDGE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-edge identifier.
///
/// Allocated from a monotonic atomic counter via [`EdgeId::next`]. Two edges
/// created independently always have different IDs, even if they share a
/// direction and color. Cloning an [`Edge`](crate::Edge) preserves its ID,
/// which is what lets a cloned knot (an undo snapshot) map back onto the same
/// renderable objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeId(u64);

impl EdgeId {
    /// Allocate a fresh, unique edge ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(EDGE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}
