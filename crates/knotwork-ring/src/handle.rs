//! Entry handles.
//!
//! A [`RingHandle`] names a slot of a [`Ring`](crate::Ring). It is
//! generation-scoped: the `generation` field allows O(1) staleness checks
//! after the entry it pointed at has been removed.

use std::fmt;

/// Address of one entry in a [`Ring`](crate::Ring).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct RingHandle {
    /// Slot index inside the ring's arena.
    pub(crate) index: u32,
    /// Slot generation when the handle was issued.
    pub(crate) generation: u32,
}

impl RingHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index inside the ring's arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation the handle was issued for.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for RingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingHandle(slot={}, gen={})", self.index, self.generation)
    }
}
